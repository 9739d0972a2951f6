//! Mutable state owned by one trade gate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use signal_core::TradingSignal;
use std::collections::VecDeque;

/// Accepted signals kept per engine.
pub const HISTORY_CAPACITY: usize = 100;

/// History and daily counters for one engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineState {
    /// Accepted signals, newest first
    signal_history: VecDeque<TradingSignal>,
    /// Accepted signals on `last_trade_date`
    daily_trades: u32,
    /// UTC date the daily counter belongs to
    last_trade_date: Option<NaiveDate>,
    last_signal_time: Option<DateTime<Utc>>,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn daily_trades(&self) -> u32 {
        self.daily_trades
    }

    pub fn last_trade_date(&self) -> Option<NaiveDate> {
        self.last_trade_date
    }

    pub fn last_signal_time(&self) -> Option<DateTime<Utc>> {
        self.last_signal_time
    }

    /// Reset the daily counter when `today` differs from the tracked date.
    pub fn roll_over(&mut self, today: NaiveDate) {
        if self.last_trade_date != Some(today) {
            self.daily_trades = 0;
            self.last_trade_date = Some(today);
        }
    }

    /// Record an accepted signal.
    pub fn record(&mut self, signal: TradingSignal, now: DateTime<Utc>) {
        self.signal_history.push_front(signal);
        self.signal_history.truncate(HISTORY_CAPACITY);
        self.daily_trades += 1;
        self.last_signal_time = Some(now);
    }

    /// Up to `limit` accepted signals, newest first.
    pub fn history(&self, limit: usize) -> impl Iterator<Item = &TradingSignal> {
        self.signal_history.iter().take(limit)
    }

    pub fn history_len(&self) -> usize {
        self.signal_history.len()
    }

    pub fn latest(&self) -> Option<&TradingSignal> {
        self.signal_history.front()
    }

    /// Clear history and counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
