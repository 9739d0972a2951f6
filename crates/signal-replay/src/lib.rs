//! Replays historical bars through the signal engine.

mod engine;
mod outcome;
mod report;
mod statistics;

pub use engine::ReplayEngine;
pub use outcome::{resolve_outcome, Outcome, SignalOutcome};
pub use report::ReplayReport;
pub use statistics::{ReplayStats, SignalRecord};
