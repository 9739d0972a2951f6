//! Replay statistics.

use serde::{Deserialize, Serialize};
use signal_core::{Bias, ScoredSignal, TradingSignal};
use signal_gate::RejectReason;
use std::collections::BTreeMap;

use crate::outcome::{Outcome, SignalOutcome};

/// An accepted signal and what became of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRecord {
    pub signal: TradingSignal,
    pub result: SignalOutcome,
}

/// Counters collected over a replay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayStats {
    /// Bars fed to the engine after warm-up
    pub ticks: usize,
    /// Ticks that could not be scored
    pub unscored: usize,
    pub bullish: usize,
    pub bearish: usize,
    pub neutral: usize,
    /// Neutral ticks scored outside the trading session
    pub outside_session: usize,
    /// Gate rejections keyed by reason code
    pub rejections: BTreeMap<String, usize>,
    pub signals: usize,
    pub take_profits: usize,
    pub stop_losses: usize,
    pub open: usize,
    /// Take profits as a share of resolved signals
    pub win_rate_pct: f64,
    /// Sum of signal results in units of risk
    pub total_r: f64,
    pub avg_strength: f64,
}

impl ReplayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_unscored(&mut self) {
        self.ticks += 1;
        self.unscored += 1;
    }

    pub fn record_scored(&mut self, scored: &ScoredSignal) {
        self.ticks += 1;
        match scored.bias {
            Bias::Bullish => self.bullish += 1,
            Bias::Bearish => self.bearish += 1,
            Bias::Neutral => {
                self.neutral += 1;
                if scored.reason.is_some() {
                    self.outside_session += 1;
                }
            }
        }
    }

    pub fn record_rejection(&mut self, reason: &RejectReason) {
        *self.rejections.entry(reason.code().to_string()).or_insert(0) += 1;
    }

    /// Fill the signal counters and ratios from the finished records.
    pub fn finalize(&mut self, records: &[SignalRecord]) {
        self.signals = records.len();
        self.take_profits = count(records, Outcome::TakeProfit);
        self.stop_losses = count(records, Outcome::StopLoss);
        self.open = count(records, Outcome::Open);

        let resolved = self.take_profits + self.stop_losses;
        self.win_rate_pct = if resolved > 0 {
            self.take_profits as f64 / resolved as f64 * 100.0
        } else {
            0.0
        };

        self.total_r = records.iter().map(|r| r.result.r_multiple).sum();
        self.avg_strength = if records.is_empty() {
            0.0
        } else {
            records
                .iter()
                .map(|r| f64::from(r.signal.strength()))
                .sum::<f64>()
                / records.len() as f64
        };
    }

    pub fn rejection_count(&self, code: &str) -> usize {
        self.rejections.get(code).copied().unwrap_or(0)
    }
}

fn count(records: &[SignalRecord], outcome: Outcome) -> usize {
    records
        .iter()
        .filter(|r| r.result.outcome == outcome)
        .count()
}
