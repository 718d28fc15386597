use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Args, Commands};
use crate::locator::{InstallType, Locator};
use crate::report::StatusReport;

mod cli;
mod locator;
mod report;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let install_type = args
        .install_type
        .as_deref()
        .and_then(InstallType::normalize);
    let locator = Locator::new(args.basedir, install_type);

    match args.command {
        Commands::Check { json } => {
            let report = StatusReport::from_locator(&locator);

            if json {
                println!("{}", serde_json::to_string_pretty(&report).unwrap());
            } else if let (Some(install_type), Some(prefix)) =
                (locator.install_type(), locator.freqtrade_binary())
            {
                println!(
                    "freqtrade {} installation at {}",
                    install_type,
                    locator.basedir().display()
                );
                println!("invocation prefix: `{prefix}`");
                println!("usable: {}", report.installation_exists);
            } else {
                println!(
                    "no freqtrade installation at {}",
                    locator.basedir().display()
                );
            }

            if report.installation_exists {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Prefix => match locator.freqtrade_binary() {
            Some(prefix) if locator.installation_exists() => {
                println!("{prefix}");
                ExitCode::SUCCESS
            }
            _ => {
                // stderr, not the log facade: this has to show up even
                // without RUST_LOG set
                eprintln!("no invocation prefix available");
                ExitCode::FAILURE
            }
        },
    }
}
