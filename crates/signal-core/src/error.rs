//! Error types for the signal engine.

use thiserror::Error;

/// Top-level signal engine error.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scoring error: {0}")]
    Score(#[from] ScoreError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised while scoring a snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Insufficient data: missing {field}")]
    InsufficientData { field: &'static str },

    #[error("Scoring failed: {0}")]
    Internal(String),
}

/// Configuration validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Indicator calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Bar source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available for the requested source")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type SignalResult<T> = Result<T, SignalError>;
