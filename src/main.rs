//! Trading signal engine CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use signal_config::{load_config, AppConfig};
use signal_monitor::setup_logging;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Printing the defaults needs no file on disk
    if let Commands::DefaultConfig = cli.command {
        return cli::commands::default_config::run().await;
    }

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

    // Setup logging
    let log_level = cli
        .log_level
        .as_ref()
        .map(cli::LogLevel::as_str)
        .unwrap_or(config.logging.level.as_str());
    let json = cli.json_logs || config.logging.is_json();
    let _guard = setup_logging(log_level, json, config.logging.file.as_deref().map(Path::new));

    run(cli.command, &cli.config, &config).await
}

async fn run(command: Commands, config_path: &Path, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Analyze(args) => cli::commands::analyze::run(args, config).await,
        Commands::Replay(args) => cli::commands::replay::run(args, config).await,
        Commands::Conditions => cli::commands::conditions::run(config).await,
        Commands::ValidateConfig => cli::commands::validate::run(config_path, config).await,
        Commands::DefaultConfig => cli::commands::default_config::run().await,
    }
}
