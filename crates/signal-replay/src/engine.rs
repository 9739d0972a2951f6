//! Replay engine.

use signal_conditions::EngineConfig;
use signal_core::traits::Validate;
use signal_core::{Bar, ConfigError, ManualClock};
use signal_gate::{GateDecision, InstrumentBook, SignalEngine};
use signal_indicators::{IndicatorPeriods, SnapshotBuilder};
use std::sync::Arc;
use tracing::{debug, info};

use crate::outcome::resolve_outcome;
use crate::report::ReplayReport;
use crate::statistics::{ReplayStats, SignalRecord};

/// Bars kept in the trailing window when building snapshots.
const DEFAULT_LOOKBACK: usize = 250;

/// Feeds historical bars through a fresh [`SignalEngine`] driven by bar time.
pub struct ReplayEngine {
    config: EngineConfig,
    builder: SnapshotBuilder,
    instruments: InstrumentBook,
    lookback: usize,
}

impl ReplayEngine {
    pub fn new(
        config: EngineConfig,
        periods: &IndicatorPeriods,
        instruments: InstrumentBook,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let builder = SnapshotBuilder::new(periods)?;
        let lookback = DEFAULT_LOOKBACK.max(builder.warmup());

        Ok(Self {
            config,
            builder,
            instruments,
            lookback,
        })
    }

    /// Bars in the trailing window. Never below the indicator warm-up.
    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback.max(self.builder.warmup());
        self
    }

    pub fn warmup(&self) -> usize {
        self.builder.warmup()
    }

    /// Replay `bars` (oldest first) for `symbol`.
    pub fn run(&self, symbol: &str, bars: &[Bar]) -> Result<ReplayReport, ConfigError> {
        let warmup = self.builder.warmup();
        let start_time = bars.first().map(Bar::datetime).unwrap_or_default();
        let clock = Arc::new(ManualClock::new(start_time));
        let mut engine = SignalEngine::new(
            self.config.clone(),
            self.instruments.clone(),
            clock.clone(),
        )?;

        let mut stats = ReplayStats::new();
        // (index of the signal bar, signal)
        let mut accepted = Vec::new();

        for i in warmup.saturating_sub(1)..bars.len() {
            let window_start = (i + 1).saturating_sub(self.lookback);
            let Some(snapshot) = self.builder.build(&bars[window_start..=i]) else {
                continue;
            };

            clock.set(bars[i].datetime());
            let report = engine.process_tick(symbol, &snapshot);

            match &report.scored {
                Some(scored) => stats.record_scored(scored),
                None => stats.record_unscored(),
            }

            match report.decision {
                Some(GateDecision::Accepted(signal)) => {
                    debug!(id = %signal.id, bar = i, "Replay signal accepted");
                    accepted.push((i, signal));
                }
                Some(GateDecision::Rejected { reason }) => stats.record_rejection(&reason),
                None => {}
            }
        }

        let records: Vec<SignalRecord> = accepted
            .into_iter()
            .map(|(i, signal)| {
                let result = resolve_outcome(&signal, &bars[i + 1..]);
                SignalRecord { signal, result }
            })
            .collect();

        stats.finalize(&records);

        info!(
            symbol,
            bars = bars.len(),
            ticks = stats.ticks,
            signals = stats.signals,
            win_rate = stats.win_rate_pct,
            "Replay complete"
        );

        Ok(ReplayReport {
            symbol: symbol.to_string(),
            bars: bars.len(),
            warmup,
            config: self.config.clone(),
            stats,
            records,
        })
    }
}
