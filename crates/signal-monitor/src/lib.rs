//! Logging setup and human readable signal rendering.

mod logging;
mod render;

pub use logging::setup_logging;
pub use render::{render_scored, render_trading_signal};
