//! Resolving what happened to a signal after it was emitted.

use serde::{Deserialize, Serialize};
use signal_core::{Action, Bar, TradingSignal};

/// How a signal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    TakeProfit,
    StopLoss,
    /// Neither level was reached before the data ended
    Open,
}

/// Outcome of one signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutcome {
    pub outcome: Outcome,
    /// Level that was hit, or the last close for open signals
    pub exit_price: f64,
    /// Bar time of the exit, epoch millis
    pub exit_timestamp: Option<i64>,
    pub bars_held: usize,
    /// Result in units of risk
    pub r_multiple: f64,
}

/// Walk `later_bars` (the bars after the signal bar) until the stop or the
/// target is touched.
///
/// When one bar touches both, the stop wins.
pub fn resolve_outcome(signal: &TradingSignal, later_bars: &[Bar]) -> SignalOutcome {
    let r_multiple = |exit: f64| {
        if signal.risk > 0.0 {
            (exit - signal.entry) * signal.action.sign() / signal.risk
        } else {
            0.0
        }
    };

    for (i, bar) in later_bars.iter().enumerate() {
        let (stop_hit, target_hit) = match signal.action {
            Action::Buy => (bar.low <= signal.stop_loss, bar.high >= signal.take_profit),
            Action::Sell => (bar.high >= signal.stop_loss, bar.low <= signal.take_profit),
        };

        let hit = if stop_hit {
            Some((Outcome::StopLoss, signal.stop_loss))
        } else if target_hit {
            Some((Outcome::TakeProfit, signal.take_profit))
        } else {
            None
        };

        if let Some((outcome, exit_price)) = hit {
            return SignalOutcome {
                outcome,
                exit_price,
                exit_timestamp: Some(bar.timestamp),
                bars_held: i + 1,
                r_multiple: r_multiple(exit_price),
            };
        }
    }

    let exit_price = later_bars.last().map_or(signal.entry, |b| b.close);
    SignalOutcome {
        outcome: Outcome::Open,
        exit_price,
        exit_timestamp: later_bars.last().map(|b| b.timestamp),
        bars_held: later_bars.len(),
        r_multiple: r_multiple(exit_price),
    }
}
