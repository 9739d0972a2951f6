//! Validate configuration command.

use anyhow::Result;
use signal_config::AppConfig;
use std::path::Path;

pub async fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);

    let engine = &config.engine;
    let session = &engine.session;
    println!("Min signal strength: {}", engine.min_signal_strength);
    println!(
        "RSI bands: oversold {} / overbought {}",
        engine.rsi_oversold, engine.rsi_overbought
    );
    println!("Max trades per day: {}", engine.max_trades_per_day);
    println!("Signal cooldown: {} min", engine.signal_cooldown().num_minutes());
    println!(
        "Session: {:02}:00-{:02}:00 UTC (Friday close {:02}:00)",
        session.start_hour, session.end_hour, session.friday_close_hour
    );
    println!("Instrument overrides: {}", config.instruments.len());

    Ok(())
}
