//! Stop-loss and take-profit prices for an accepted signal.

use signal_core::{Action, ExpectedMove};

/// Absolute stop and target prices around an entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtectiveLevels {
    pub stop_loss: f64,
    pub take_profit: f64,
    /// Distance between entry and stop
    pub risk: f64,
}

impl ProtectiveLevels {
    /// Place the stop against the trade and the target with it.
    pub fn new(action: Action, entry: f64, expected: &ExpectedMove) -> Self {
        let (stop_loss, take_profit) = match action {
            Action::Buy => (entry - expected.stop_loss, entry + expected.take_profit),
            Action::Sell => (entry + expected.stop_loss, entry - expected.take_profit),
        };

        Self {
            stop_loss,
            take_profit,
            risk: (entry - stop_loss).abs(),
        }
    }
}
