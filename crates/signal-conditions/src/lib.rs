//! Condition evaluators and signal scoring.
//!
//! Six independent evaluators vote long and/or short on a resolved
//! indicator snapshot:
//! - Trend (price vs trend SMA, fast vs slow EMA)
//! - Strength (EMA gap in pips)
//! - RSI momentum (with MACD confirmation in the neutral band)
//! - Price position (Bollinger halves, fast EMA)
//! - Price action (current vs previous price)
//! - Volume / volatility (volume surge or no squeeze)
//!
//! [`SignalScorer`] counts the votes into a [`ScoredSignal`].
//!
//! [`ScoredSignal`]: signal_core::ScoredSignal

mod config;
mod position;
mod price_action;
mod rsi_momentum;
mod scorer;
mod session;
mod set;
mod strength;
mod trend;
mod volume;

pub use config::{EngineConfig, MAX_SIGNAL_COOLDOWN_MS};
pub use position::PricePositionCondition;
pub use price_action::PriceActionCondition;
pub use rsi_momentum::RsiMomentumCondition;
pub use scorer::{SignalScorer, OUTSIDE_SESSION_REASON};
pub use session::TradingSession;
pub use set::{ConditionInfo, ConditionSet};
pub use strength::StrengthCondition;
pub use trend::TrendCondition;
pub use volume::VolumeCondition;
