//! Calculator traits for the indicators that fill a snapshot.

use crate::error::IndicatorError;

/// A calculator over one price column (oldest first).
///
/// Returns one value per complete window. Too little data yields an empty
/// vector, never a panic.
pub trait Indicator: Send + Sync {
    type Output;

    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Values needed before the first output.
    fn period(&self) -> usize;

    fn name(&self) -> &str;

    /// Value at the last input, if there is enough data.
    fn latest(&self, data: &[f64]) -> Option<Self::Output> {
        self.calculate(data).pop()
    }

    /// Error out instead of returning an empty series.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        match data.len() {
            available if available < self.period() => Err(IndicatorError::InsufficientData {
                required: self.period(),
                available,
            }),
            _ => Ok(()),
        }
    }
}

/// A calculator producing several lines per input, like MACD or bands.
pub trait MultiOutputIndicator: Send + Sync {
    type Outputs;

    fn calculate(&self, data: &[f64]) -> Vec<Self::Outputs>;

    /// Values needed before the first output.
    fn period(&self) -> usize;

    fn name(&self) -> &str;

    fn latest(&self, data: &[f64]) -> Option<Self::Outputs> {
        self.calculate(data).pop()
    }
}
