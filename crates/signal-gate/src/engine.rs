//! The engine facade: scoring plus gating for one symbol stream.

use chrono::{DateTime, Utc};
use signal_conditions::SignalScorer;
use signal_core::traits::{Clock, Validate};
use signal_core::{ConfigError, IndicatorSnapshot, ScoreError, ScoredSignal, TradingSignal};
use std::sync::Arc;
use tracing::{error, warn};

use crate::gate::{GateDecision, TradeGate};
use crate::instruments::InstrumentBook;
use crate::state::EngineState;
use crate::stats::TodayStats;
use crate::EngineConfig;

/// Outcome of processing one tick.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// `None` when the snapshot could not be scored
    pub scored: Option<ScoredSignal>,
    /// Gate decision for the scored signal
    pub decision: Option<GateDecision>,
}

impl TickReport {
    /// The accepted trading signal, if any.
    pub fn signal(&self) -> Option<&TradingSignal> {
        self.decision.as_ref().and_then(|d| d.signal())
    }
}

/// Scores snapshots and turns qualifying ones into trading signals.
///
/// One engine holds one [`EngineState`]; use a [`SignalDesk`] to keep
/// symbols independent.
///
/// [`SignalDesk`]: crate::SignalDesk
pub struct SignalEngine {
    scorer: SignalScorer,
    gate: TradeGate,
    instruments: InstrumentBook,
    clock: Arc<dyn Clock>,
}

impl SignalEngine {
    /// Create an engine. Fails if the configuration is invalid.
    pub fn new(
        config: EngineConfig,
        instruments: InstrumentBook,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            scorer: SignalScorer::new(config.clone()),
            gate: TradeGate::new(config),
            instruments,
            clock,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        self.gate.config()
    }

    pub fn scorer(&self) -> &SignalScorer {
        &self.scorer
    }

    /// Score `snapshot` for `symbol` at the current clock time.
    ///
    /// Returns `None` when the snapshot cannot be scored; the cause is logged.
    pub fn analyze_signal(&self, symbol: &str, snapshot: &IndicatorSnapshot) -> Option<ScoredSignal> {
        self.analyze_at(symbol, snapshot, self.clock.now())
    }

    fn analyze_at(
        &self,
        symbol: &str,
        snapshot: &IndicatorSnapshot,
        now: DateTime<Utc>,
    ) -> Option<ScoredSignal> {
        let instrument = self.instruments.resolve(symbol);

        match self.scorer.score(symbol, snapshot, &instrument, now) {
            Ok(scored) => Some(scored),
            Err(ScoreError::InsufficientData { field }) => {
                warn!(symbol, field, "Insufficient data to score signal");
                None
            }
            Err(e) => {
                error!(symbol, error = %e, "Signal analysis failed");
                None
            }
        }
    }

    /// Pass a scored signal through the gate at the current clock time.
    pub fn generate_trading_signal(&mut self, scored: &ScoredSignal) -> Option<TradingSignal> {
        self.gate.try_emit(scored, self.clock.now())
    }

    /// Score and gate one snapshot.
    pub fn process_tick(&mut self, symbol: &str, snapshot: &IndicatorSnapshot) -> TickReport {
        let now = self.clock.now();
        let scored = self.analyze_at(symbol, snapshot, now);
        let decision = scored.as_ref().map(|s| self.gate.evaluate(s, now));

        TickReport { scored, decision }
    }

    /// Up to `limit` accepted signals, newest first.
    pub fn signal_history(&self, limit: usize) -> Vec<&TradingSignal> {
        self.gate.state().history(limit).collect()
    }

    pub fn today_stats(&self) -> TodayStats {
        TodayStats::compute(self.gate.state(), self.gate.config(), self.clock.now())
    }

    pub fn state(&self) -> &EngineState {
        self.gate.state()
    }

    /// Clear history and counters.
    pub fn reset(&mut self) {
        self.gate.reset();
    }
}
