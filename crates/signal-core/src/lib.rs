//! Core types and traits for the signal engine.
//!
//! This crate provides the foundational building blocks including:
//! - Indicator snapshots and their normalized form
//! - Condition results, scored signals and trading signals
//! - Instrument metadata (pip size, 24/7 markets)
//! - Core traits for condition evaluators, indicators, clocks and bar sources

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ConfigError, DataError, IndicatorError, ScoreError, SignalError, SignalResult};
pub use traits::*;
pub use types::*;
