//! The trade gate: decides whether a scored signal becomes a trade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use signal_core::{
    Action, Bias, ConditionKind, ScoredSignal, TradingSignal, TRADING_SIGNAL_TYPE,
};
use std::fmt;
use tracing::{debug, info};

use crate::levels::ProtectiveLevels;
use crate::state::EngineState;
use crate::EngineConfig;

/// Why a scored signal was not turned into a trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// Bias is NEUTRAL
    Neutral,
    /// Strength below the configured minimum
    WeakSignal { strength: u8, min: u8 },
    /// Previous acceptance is too recent
    Cooldown { remaining_ms: i64 },
    /// Daily cap reached for the current UTC date
    DailyLimit { trades: u32, max: u32 },
    /// A required condition is missing or not directional
    QualityFilter { condition: ConditionKind },
}

impl RejectReason {
    /// Stable identifier, used for counting and logs.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::Neutral => "neutral",
            RejectReason::WeakSignal { .. } => "weak_signal",
            RejectReason::Cooldown { .. } => "cooldown",
            RejectReason::DailyLimit { .. } => "daily_limit",
            RejectReason::QualityFilter { .. } => "quality_filter",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Neutral => write!(f, "neutral bias"),
            RejectReason::WeakSignal { strength, min } => {
                write!(f, "signal too weak ({}/{})", strength, min)
            }
            RejectReason::Cooldown { remaining_ms } => {
                write!(f, "cooldown active ({}s remaining)", remaining_ms / 1000)
            }
            RejectReason::DailyLimit { trades, max } => {
                write!(f, "daily trade limit reached ({}/{})", trades, max)
            }
            RejectReason::QualityFilter { condition } => {
                write!(f, "quality filter failed on {}", condition)
            }
        }
    }
}

/// Decision from the trade gate.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Accepted(TradingSignal),
    Rejected { reason: RejectReason },
}

impl GateDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, GateDecision::Accepted(_))
    }

    pub fn signal(&self) -> Option<&TradingSignal> {
        match self {
            GateDecision::Accepted(signal) => Some(signal),
            GateDecision::Rejected { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&RejectReason> {
        match self {
            GateDecision::Accepted(_) => None,
            GateDecision::Rejected { reason } => Some(reason),
        }
    }

    pub fn into_signal(self) -> Option<TradingSignal> {
        match self {
            GateDecision::Accepted(signal) => Some(signal),
            GateDecision::Rejected { .. } => None,
        }
    }
}

/// Stateful gate applying cooldown, daily cap and quality checks.
#[derive(Debug, Clone)]
pub struct TradeGate {
    config: EngineConfig,
    state: EngineState,
}

impl TradeGate {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: EngineState::new(),
        }
    }

    /// Resume from previously saved state.
    pub fn with_state(config: EngineConfig, state: EngineState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Decide on `scored` at `now`.
    ///
    /// State changes only on acceptance, apart from the daily counter
    /// rolling over to a new UTC date.
    pub fn evaluate(&mut self, scored: &ScoredSignal, now: DateTime<Utc>) -> GateDecision {
        match self.check(scored, now) {
            Ok(action) => {
                let signal = self.accept(scored, action, now);
                info!(
                    id = %signal.id,
                    symbol = %signal.symbol(),
                    action = %signal.action,
                    entry = signal.entry,
                    stop_loss = signal.stop_loss,
                    take_profit = signal.take_profit,
                    strength = signal.strength(),
                    "Trading signal generated"
                );
                GateDecision::Accepted(signal)
            }
            Err(reason) => {
                debug!(
                    symbol = %scored.symbol,
                    reason = reason.code(),
                    "Signal rejected: {}",
                    reason
                );
                GateDecision::Rejected { reason }
            }
        }
    }

    /// Same as [`TradeGate::evaluate`], keeping only the accepted signal.
    pub fn try_emit(&mut self, scored: &ScoredSignal, now: DateTime<Utc>) -> Option<TradingSignal> {
        self.evaluate(scored, now).into_signal()
    }

    fn check(&mut self, scored: &ScoredSignal, now: DateTime<Utc>) -> Result<Action, RejectReason> {
        let action = match scored.bias {
            Bias::Bullish => Action::Buy,
            Bias::Bearish => Action::Sell,
            Bias::Neutral => return Err(RejectReason::Neutral),
        };

        if scored.strength < self.config.min_signal_strength {
            return Err(RejectReason::WeakSignal {
                strength: scored.strength,
                min: self.config.min_signal_strength,
            });
        }

        if let Some(last) = self.state.last_signal_time() {
            let elapsed = now - last;
            let cooldown = self.config.signal_cooldown();
            if elapsed < cooldown {
                // A clock that went backwards makes `elapsed` negative
                let remaining = cooldown.checked_sub(&elapsed).unwrap_or(cooldown);
                return Err(RejectReason::Cooldown {
                    remaining_ms: remaining.num_milliseconds(),
                });
            }
        }

        self.state.roll_over(now.date_naive());
        if self.state.daily_trades() >= self.config.max_trades_per_day {
            return Err(RejectReason::DailyLimit {
                trades: self.state.daily_trades(),
                max: self.config.max_trades_per_day,
            });
        }

        Self::quality_check(scored)?;

        Ok(action)
    }

    fn quality_check(scored: &ScoredSignal) -> Result<(), RejectReason> {
        for kind in [ConditionKind::Trend, ConditionKind::Strength] {
            match scored.condition(kind) {
                Some(c) if c.is_directional() => {}
                _ => return Err(RejectReason::QualityFilter { condition: kind }),
            }
        }
        for kind in [ConditionKind::Rsi, ConditionKind::Position] {
            if scored.condition(kind).is_none() {
                return Err(RejectReason::QualityFilter { condition: kind });
            }
        }
        Ok(())
    }

    fn accept(&mut self, scored: &ScoredSignal, action: Action, now: DateTime<Utc>) -> TradingSignal {
        let entry = scored.price;
        let levels = ProtectiveLevels::new(action, entry, &scored.expected_move);

        // The signal belongs to the moment it was accepted
        let mut scored = scored.clone();
        scored.timestamp = now;

        let signal = TradingSignal {
            id: TradingSignal::make_id(now),
            signal_type: TRADING_SIGNAL_TYPE.to_string(),
            action,
            entry,
            stop_loss: levels.stop_loss,
            take_profit: levels.take_profit,
            risk: levels.risk,
            scored,
        };

        self.state.record(signal.clone(), now);
        signal
    }
}
