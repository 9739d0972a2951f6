//! Analyze command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use signal_config::AppConfig;
use signal_core::traits::Clock;
use signal_core::{IndicatorSnapshot, ManualClock, ScoredSignal, SystemClock, TradingSignal};
use signal_gate::{GateDecision, RejectReason, SignalDesk};
use signal_monitor::{render_scored, render_trading_signal};
use std::sync::Arc;
use tracing::info;

use super::instrument_book;
use crate::cli::{AnalyzeArgs, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeOutput<'a> {
    symbol: &'a str,
    scored: Option<&'a ScoredSignal>,
    signal: Option<&'a TradingSignal>,
    rejection: Option<&'a RejectReason>,
}

pub async fn run(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let text = tokio::fs::read_to_string(&args.snapshot)
        .await
        .with_context(|| format!("Failed to read snapshot {:?}", args.snapshot))?;
    let snapshot: IndicatorSnapshot =
        serde_json::from_str(&text).context("Failed to parse snapshot JSON")?;

    let clock: Arc<dyn Clock> = match args.at {
        Some(at) => Arc::new(ManualClock::new(at)),
        None => Arc::new(SystemClock),
    };
    let mut desk = SignalDesk::new(config.engine.clone(), instrument_book(config), clock)
        .context("Invalid engine configuration")?;

    info!(symbol = %args.symbol, "Analyzing snapshot");
    let report = desk.process_tick(&args.symbol, &snapshot)?;
    let rejection = report.decision.as_ref().and_then(GateDecision::reason);

    match args.output {
        OutputFormat::Json => {
            let output = AnalyzeOutput {
                symbol: &args.symbol,
                scored: report.scored.as_ref(),
                signal: report.signal(),
                rejection,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => match &report.scored {
            None => println!("{}: snapshot could not be scored", args.symbol),
            Some(scored) => {
                println!("{}", render_scored(scored));
                match (report.signal(), rejection) {
                    (Some(signal), _) => println!("{}", render_trading_signal(signal)),
                    (None, Some(reason)) => println!("No trade: {}", reason),
                    (None, None) => {}
                }
            }
        },
    }

    Ok(())
}
