//! Technical indicators and indicator snapshot building.
//!
//! This crate provides the calculators the engine consumes:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD)
//! - Volatility indicators (ATR, Bollinger Bands)
//! - Trend strength scaled by instrument pip size
//! - [`SnapshotBuilder`], which turns a bar window into an [`IndicatorSnapshot`]
//!
//! [`IndicatorSnapshot`]: signal_core::IndicatorSnapshot

pub mod momentum;
pub mod moving_average;
pub mod snapshot;
pub mod strength;
pub mod volatility;

pub use momentum::{Macd, MacdOutput, Rsi};
pub use moving_average::{Ema, Sma};
pub use snapshot::{IndicatorPeriods, SnapshotBuilder};
pub use strength::trend_strength;
pub use volatility::{Atr, BollingerBands, BollingerOutput};
