//! Configuration structures.

use serde::{Deserialize, Serialize};
use signal_conditions::EngineConfig;
use signal_core::traits::Validate;
use signal_core::{ConfigError, InstrumentSpec};
use signal_indicators::IndicatorPeriods;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub indicators: IndicatorPeriods,
    /// Per-symbol overrides of the inferred instrument metadata
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instruments: Vec<InstrumentSpec>,
}

impl AppConfig {
    /// The configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.indicators.validate()?;

        for instrument in &self.instruments {
            if instrument.symbol.trim().is_empty() {
                return Err(ConfigError::invalid("instruments.symbol", "must not be empty"));
            }
            if !(instrument.pip_size.is_finite() && instrument.pip_size > 0.0) {
                return Err(ConfigError::invalid(
                    "instruments.pip_size",
                    format!("must be positive for {}", instrument.symbol),
                ));
            }
        }

        Ok(())
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "signal-engine".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Also write JSON logs to this file
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_toml_round_trips() {
        let text = AppConfig::default().to_toml().unwrap();
        assert!(text.contains("[engine]"));
        assert!(text.contains("[engine.session]"));

        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.engine, EngineConfig::default());
        assert_eq!(parsed.indicators, IndicatorPeriods::default());
    }

    #[test]
    fn test_bad_instrument() {
        let mut config = AppConfig::default();
        config.instruments.push(InstrumentSpec::new(
            "XYZ",
            signal_core::AssetClass::Other,
            0.0,
        ));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pip_size"));
    }

    #[test]
    fn test_logging_format() {
        let logging = LoggingConfig {
            format: "JSON".to_string(),
            ..Default::default()
        };
        assert!(logging.is_json());
        assert!(!LoggingConfig::default().is_json());
    }
}
