//! Command-line interface.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "leadconvert",
    about = "Batch reconciler that drains the Salesforce lead-conversion queue",
    version
)]
pub struct Cli {
    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of leadconvert.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute one reconciliation pass over the pending queue
    Run,
    /// List the pending queue and error-sink counts
    Status(commands::status::StatusArgs),
    /// Verify database connectivity and Salesforce login
    Check,
}

/// Report a command failure and exit nonzero.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
