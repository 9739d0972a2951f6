//! Replay command implementation.

use anyhow::{Context, Result};
use signal_config::AppConfig;
use signal_data::load_csv;
use signal_replay::ReplayEngine;
use tracing::info;

use super::instrument_book;
use crate::cli::{OutputFormat, ReplayArgs};

pub async fn run(args: ReplayArgs, config: &AppConfig) -> Result<()> {
    if !args.data.exists() {
        anyhow::bail!(
            "Data file '{}' does not exist. Provide a CSV file with --data (e.g. --data ./data/EURUSD.csv)",
            args.data.display()
        );
    }

    let bars = load_csv(&args.data, &args.symbol)
        .await
        .with_context(|| format!("Failed to load bars from {:?}", args.data))?;
    info!(symbol = %args.symbol, bars = bars.len(), "Loaded bars");

    let mut engine = ReplayEngine::new(
        config.engine.clone(),
        &config.indicators,
        instrument_book(config),
    )
    .context("Invalid replay configuration")?;
    if let Some(lookback) = args.lookback {
        engine = engine.with_lookback(lookback);
    }

    let report = engine.run(&args.symbol, &bars)?;

    // Output results
    match args.output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{}", report.summary()),
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        let json = report.to_json()?;
        tokio::fs::write(save_path, json)
            .await
            .with_context(|| format!("Failed to write {:?}", save_path))?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}
