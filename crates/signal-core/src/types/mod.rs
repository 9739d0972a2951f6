//! Core data types for the signal engine.

mod condition;
mod instrument;
mod ohlcv;
mod signal;
mod snapshot;

pub use condition::{ConditionKind, ConditionResult};
pub use instrument::{AssetClass, InstrumentSpec};
pub use ohlcv::Bar;
pub use signal::{
    Action, Bias, ExpectedMove, ScoredSignal, TradingSignal, MAX_SIGNAL_STRENGTH,
    TRADING_SIGNAL_TYPE,
};
pub use snapshot::{IndicatorSnapshot, ResolvedSnapshot};
