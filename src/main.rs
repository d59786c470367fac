//! Leadconvert CLI entry point.

use clap::Parser;

use leadconvert::cli::{commands, handle_error, Cli, Commands};
use leadconvert::infrastructure::{config::ConfigLoader, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Configuration comes first: a missing credential must fail the run
    // before anything touches the store or the remote system.
    let loaded = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {err:#}");
            std::process::exit(2);
        }
    };

    logging::init(&config.logging);

    let result = match &cli.command {
        Commands::Run => commands::run::execute(&config, cli.json).await,
        Commands::Status(args) => commands::status::execute(&config, args, cli.json).await,
        Commands::Check => commands::check::execute(&config, cli.json).await,
    };

    if let Err(err) = result {
        handle_error(&err, cli.json);
    }
}
