/// Finds a freqtrade installation on disk and works out how to invoke it.
///
/// Two ways of running freqtrade are supported: straight out of the
/// checkout's virtualenv ("source") or through docker-compose ("docker").
/// Everything here is a single existence check plus string building;
/// a missing installation is a normal outcome, not an error.
use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallType {
    Source,
    Docker,
}

impl InstallType {
    /// Deliberately not a `FromStr` impl: unknown strings coerce to
    /// `None` instead of being rejected, so there is no error to return.
    pub fn normalize(raw: &str) -> Option<Self> {
        match raw {
            "source" => Some(InstallType::Source),
            "docker" => Some(InstallType::Docker),
            _ => None,
        }
    }
}

impl fmt::Display for InstallType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InstallType::Source => write!(f, "source"),
            InstallType::Docker => write!(f, "docker"),
        }
    }
}

pub struct Locator {
    basedir: PathBuf,
    install_type: Option<InstallType>,
    freqtrade_binary: Option<String>,
}

impl Locator {
    /// Checks for `<basedir>/.env/bin/freqtrade` once. If it's missing we
    /// warn and stay in the "no installation" state, whatever install type
    /// the caller asked for. If it's there and a type was given, the
    /// invocation prefix gets derived right away.
    pub fn new(basedir: impl Into<PathBuf>, install_type: Option<InstallType>) -> Self {
        let mut locator = Self {
            basedir: basedir.into(),
            install_type: None,
            freqtrade_binary: None,
        };

        if !locator.venv_binary().exists() {
            warn!(
                "no freqtrade installation found under {}",
                locator.basedir.display()
            );
            return locator;
        }

        if let Some(install_type) = install_type {
            let prefix = locator.derive_prefix(install_type);
            debug!("freqtrade binary: `{prefix}`");

            locator.install_type = Some(install_type);
            locator.freqtrade_binary = Some(prefix);
        }

        locator
    }

    pub fn basedir(&self) -> &Path {
        &self.basedir
    }

    pub fn install_type(&self) -> Option<InstallType> {
        self.install_type
    }

    /// The command prefix callers prepend to actual freqtrade arguments.
    /// `Some` exactly when an install type is set.
    pub fn freqtrade_binary(&self) -> Option<&str> {
        self.freqtrade_binary.as_deref()
    }

    /// Silent-coercion setter: anything outside {"source", "docker"}
    /// clears the install type. The prefix is re-derived (or cleared)
    /// so it always tracks the install type.
    pub fn set_install_type(&mut self, raw: &str) {
        self.install_type = InstallType::normalize(raw);
        self.freqtrade_binary = self.install_type.map(|t| self.derive_prefix(t));
    }

    /// Returns true if everything is set up to invoke freqtrade.
    ///
    /// docker: returns true without looking any further, we don't verify
    /// that docker itself is installed.
    /// source: the venv binary has to still be on disk.
    pub fn installation_exists(&self) -> bool {
        if self.freqtrade_binary.is_none() {
            return false;
        }

        match self.install_type {
            Some(InstallType::Docker) => true,
            Some(InstallType::Source) => self.venv_binary().exists(),
            None => false,
        }
    }

    fn venv_binary(&self) -> PathBuf {
        self.basedir.join(".env").join("bin").join("freqtrade")
    }

    fn derive_prefix(&self, install_type: InstallType) -> String {
        match install_type {
            InstallType::Source => format!(
                "source {}/.env/bin/activate; freqtrade",
                self.basedir.display()
            ),
            InstallType::Docker => "docker-compose run --rm freqtrade".to_string(),
        }
    }
}
