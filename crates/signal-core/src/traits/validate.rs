//! Configuration validation trait.

use crate::error::ConfigError;

/// Configuration sections validate themselves once, at construction.
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}
