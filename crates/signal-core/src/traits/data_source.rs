//! Bar source trait definitions.

use crate::error::DataError;
use crate::types::Bar;
use async_trait::async_trait;

/// Trait for historical bar sources.
#[async_trait]
pub trait BarSource: Send + Sync {
    /// Load every bar for `symbol`, ordered from oldest to newest.
    async fn load_bars(&self, symbol: &str) -> Result<Vec<Bar>, DataError>;

    /// Name of the source for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource {
        bars: Vec<Bar>,
    }

    #[async_trait]
    impl BarSource for StaticSource {
        async fn load_bars(&self, _symbol: &str) -> Result<Vec<Bar>, DataError> {
            if self.bars.is_empty() {
                return Err(DataError::NoDataAvailable);
            }
            Ok(self.bars.clone())
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    #[tokio::test]
    async fn test_bar_source() {
        let source = StaticSource {
            bars: vec![Bar::new(1, 1.0, 1.0, 1.0, 1.0, 0.0)],
        };
        let bars = source.load_bars("EURUSD").await.unwrap();
        assert_eq!(bars.len(), 1);

        let empty = StaticSource { bars: vec![] };
        assert!(empty.load_bars("EURUSD").await.is_err());
    }
}
