// CLI module for handling command-line interface

use clap::{Parser, Subcommand};

use crate::constants;

#[derive(Parser)]
#[command(name = "sdkcat")]
#[command(about = "Catalog browser for mobile SDKs and their platform requirements")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List SDKs in the catalog, optionally filtered
    List {
        /// Only SDKs carrying this tag ("All" disables the filter)
        #[arg(long)]
        tag: Option<String>,
        /// Only SDKs in this language ("All" disables the filter)
        #[arg(long)]
        language: Option<String>,
        /// Only SDKs whose name contains this term
        #[arg(long)]
        search: Option<String>,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Show an SDK's version history and requirement changes
    Show {
        /// Exact SDK name (case-sensitive)
        name: String,
        /// Number of recent versions to show
        #[arg(long, default_value_t = constants::RECENT_VERSION_COUNT)]
        count: usize,
        /// Show the full version history
        #[arg(long)]
        all: bool,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// List the distinct tags and languages usable as filters
    Options {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the catalog file and report malformed records
    Check {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
