//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, LoggingConfig};

use config::{Config, Environment, File};
use signal_core::traits::Validate;
use std::path::Path;
use thiserror::Error;

/// Prefix for environment overrides, e.g. `SIGNALS__ENGINE__MIN_SIGNAL_STRENGTH`.
pub const ENV_PREFIX: &str = "SIGNALS";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] signal_core::ConfigError),
}

/// Load configuration from file and environment, then validate it.
pub fn load_config(path: &Path) -> Result<AppConfig, SettingsError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app: AppConfig = config.try_deserialize()?;
    app.validate()?;
    Ok(app)
}
