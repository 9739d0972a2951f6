//! CLI command implementations.

pub mod analyze;
pub mod conditions;
pub mod default_config;
pub mod replay;
pub mod validate;

use signal_config::AppConfig;
use signal_gate::InstrumentBook;

/// Instrument overrides from the configuration.
pub(crate) fn instrument_book(config: &AppConfig) -> InstrumentBook {
    InstrumentBook::new(config.instruments.iter().cloned())
}
