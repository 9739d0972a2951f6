//! Bar sources for replays.

mod csv_source;

pub use csv_source::CsvDataSource;

use signal_core::traits::BarSource;
use signal_core::{Bar, DataError};
use std::path::Path;

/// Load bars from a CSV file.
pub async fn load_csv(path: impl AsRef<Path>, symbol: &str) -> Result<Vec<Bar>, DataError> {
    let source = CsvDataSource::new(path)?;
    source.load_bars(symbol).await
}
