use serde::Serialize;

use crate::locator::Locator;

/// Machine-readable summary of what the locator found,
/// for `check --json` consumers.
#[derive(Serialize, Debug)]
pub struct StatusReport {
    pub basedir: String,
    pub install_type: Option<String>,
    pub freqtrade_binary: Option<String>,
    pub installation_exists: bool,
}

impl StatusReport {
    pub fn from_locator(locator: &Locator) -> Self {
        Self {
            basedir: locator.basedir().display().to_string(),
            install_type: locator.install_type().map(|t| t.to_string()),
            freqtrade_binary: locator.freqtrade_binary().map(str::to_string),
            installation_exists: locator.installation_exists(),
        }
    }
}
