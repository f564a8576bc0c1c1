//! CLI argument definitions using clap
//!
//! Commands:
//! - brewdex serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// brewdex - a read-oriented query API over a brewery dataset
#[derive(Parser, Debug)]
#[command(name = "brewdex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./brewdex.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
