//! Core traits for the signal engine.

mod clock;
mod condition;
mod data_source;
mod indicator;
mod validate;

pub use clock::{Clock, ManualClock, SystemClock};
pub use condition::ConditionEvaluator;
pub use data_source::BarSource;
pub use indicator::{Indicator, MultiOutputIndicator};
pub use validate::Validate;
