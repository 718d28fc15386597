use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base directory of the freqtrade checkout
    #[arg(short, long, default_value = ".")]
    pub basedir: PathBuf,

    /// How freqtrade is installed ("source" or "docker").
    /// Anything else is treated as not set.
    #[arg(short, long)]
    pub install_type: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report whether a usable freqtrade installation exists
    Check {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the command prefix used to invoke freqtrade
    Prefix,
}
