//! Engine configuration shared by the scorer and the trade gate.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use signal_core::traits::Validate;
use signal_core::{ConfigError, MAX_SIGNAL_STRENGTH};

use crate::session::TradingSession;

/// Longest accepted cooldown: one week.
pub const MAX_SIGNAL_COOLDOWN_MS: u64 = 7 * 24 * 60 * 60 * 1000;

/// Thresholds and limits for scoring and gating.
///
/// Built and validated once at startup. Missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Votes needed for a directional bias and for a trade
    pub min_signal_strength: u8,
    /// RSI below this favors longs
    pub rsi_oversold: f64,
    /// RSI above this favors shorts
    pub rsi_overbought: f64,
    /// Lower edge of the band where MACD decides momentum
    pub rsi_neutral_low: f64,
    /// Upper edge of the band where MACD decides momentum
    pub rsi_neutral_high: f64,
    /// Minimum EMA gap, in pips
    pub min_trend_strength: f64,
    /// Volume must exceed the volume SMA times this to count as a surge
    pub volume_multiplier: f64,
    /// Band width below `atr * squeeze_atr_ratio` is a squeeze
    pub squeeze_atr_ratio: f64,
    /// Stop distance in ATRs
    pub stop_loss_atr_mult: f64,
    /// Target distance as a multiple of the stop distance
    pub take_profit_ratio: f64,
    /// Accepted signals per UTC day
    pub max_trades_per_day: u32,
    /// Minimum time between accepted signals, in milliseconds
    pub signal_cooldown_ms: u64,
    pub session: TradingSession,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_signal_strength: 4,
            rsi_oversold: 40.0,
            rsi_overbought: 60.0,
            rsi_neutral_low: 40.0,
            rsi_neutral_high: 60.0,
            min_trend_strength: 5.0,
            volume_multiplier: 1.2,
            squeeze_atr_ratio: 1.5,
            stop_loss_atr_mult: 1.5,
            take_profit_ratio: 2.0,
            max_trades_per_day: 5,
            signal_cooldown_ms: 1_800_000,
            session: TradingSession::default(),
        }
    }
}

impl EngineConfig {
    /// Cooldown as a duration, clamped to [`MAX_SIGNAL_COOLDOWN_MS`].
    pub fn signal_cooldown(&self) -> Duration {
        let ms = self.signal_cooldown_ms.min(MAX_SIGNAL_COOLDOWN_MS);
        Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX))
    }
}

fn check_rsi(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ConfigError::invalid(field, "must be between 0 and 100"));
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ConfigError::invalid(field, "must be a positive number"));
    }
    Ok(())
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_signal_strength == 0 || self.min_signal_strength > MAX_SIGNAL_STRENGTH {
            return Err(ConfigError::invalid(
                "min_signal_strength",
                format!("must be between 1 and {}", MAX_SIGNAL_STRENGTH),
            ));
        }

        check_rsi("rsi_oversold", self.rsi_oversold)?;
        check_rsi("rsi_overbought", self.rsi_overbought)?;
        check_rsi("rsi_neutral_low", self.rsi_neutral_low)?;
        check_rsi("rsi_neutral_high", self.rsi_neutral_high)?;

        if self.rsi_oversold > self.rsi_overbought {
            return Err(ConfigError::invalid(
                "rsi_oversold",
                "must not exceed rsi_overbought",
            ));
        }
        if self.rsi_neutral_low > self.rsi_neutral_high {
            return Err(ConfigError::invalid(
                "rsi_neutral_low",
                "must not exceed rsi_neutral_high",
            ));
        }

        if !(self.min_trend_strength.is_finite() && self.min_trend_strength >= 0.0) {
            return Err(ConfigError::invalid(
                "min_trend_strength",
                "must be zero or positive",
            ));
        }
        check_positive("volume_multiplier", self.volume_multiplier)?;
        check_positive("squeeze_atr_ratio", self.squeeze_atr_ratio)?;
        check_positive("stop_loss_atr_mult", self.stop_loss_atr_mult)?;
        check_positive("take_profit_ratio", self.take_profit_ratio)?;

        if self.max_trades_per_day == 0 {
            return Err(ConfigError::invalid(
                "max_trades_per_day",
                "must be at least 1",
            ));
        }

        if self.signal_cooldown_ms > MAX_SIGNAL_COOLDOWN_MS {
            return Err(ConfigError::invalid(
                "signal_cooldown_ms",
                format!("must not exceed {} (one week)", MAX_SIGNAL_COOLDOWN_MS),
            ));
        }

        self.session.validate()
    }
}
