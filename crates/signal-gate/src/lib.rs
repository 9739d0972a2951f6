//! Turning scored signals into trades.
//!
//! Provides the stateful trade gate (cooldown, daily cap, quality filter),
//! the per-engine history and daily counters, and the [`SignalEngine`]
//! facade hosts talk to.

mod desk;
mod engine;
mod gate;
mod instruments;
mod levels;
mod state;
mod stats;

pub use desk::SignalDesk;
pub use engine::{SignalEngine, TickReport};
pub use gate::{GateDecision, RejectReason, TradeGate};
pub use instruments::InstrumentBook;
pub use levels::ProtectiveLevels;
pub use state::{EngineState, HISTORY_CAPACITY};
pub use stats::TodayStats;

pub use signal_conditions::EngineConfig;
