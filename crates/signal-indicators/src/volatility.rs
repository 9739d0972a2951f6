//! ATR and Bollinger Bands, the inputs of the volume/squeeze condition.

use serde::{Deserialize, Serialize};
use signal_core::traits::MultiOutputIndicator;
use signal_core::Bar;

/// True range of `bar` given the previous close.
fn true_range(bar: &Bar, prev_close: f64) -> f64 {
    (bar.high - bar.low)
        .max((bar.high - prev_close).abs())
        .max((bar.low - prev_close).abs())
}

/// Average True Range with Wilder's smoothing.
///
/// Works on bars rather than a single price column, so it does not
/// implement [`Indicator`](signal_core::traits::Indicator).
#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "ATR period must be positive");
        Self { period }
    }

    /// Bars required before the first value.
    pub fn period(&self) -> usize {
        self.period + 1
    }

    /// One value per bar once `period()` bars are available.
    pub fn calculate(&self, bars: &[Bar]) -> Vec<f64> {
        if bars.len() < self.period() {
            return vec![];
        }

        let n = self.period as f64;
        let mut ranges = bars.windows(2).map(|w| true_range(&w[1], w[0].close));

        let seed = ranges.by_ref().take(self.period).sum::<f64>() / n;
        std::iter::once(seed)
            .chain(ranges.scan(seed, |atr, tr| {
                *atr = (*atr * (n - 1.0) + tr) / n;
                Some(*atr)
            }))
            .collect()
    }

    pub fn latest(&self, bars: &[Bar]) -> Option<f64> {
        self.calculate(bars).pop()
    }
}

/// Upper, middle and lower band at one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    pub upper: f64,
    /// SMA of the window
    pub middle: f64,
    pub lower: f64,
}

impl BollingerOutput {
    /// Distance between the outer bands.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// SMA with bands `k` population standard deviations either side.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    k: f64,
}

impl BollingerBands {
    /// 20 bars, 2 standard deviations.
    pub fn new() -> Self {
        Self::with_params(20, 2.0)
    }

    pub fn with_params(period: usize, k: f64) -> Self {
        assert!(period > 1, "Bollinger period must be at least 2");
        assert!(k > 0.0, "Bollinger width must be positive");
        Self { period, k }
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Outputs = BollingerOutput;

    fn calculate(&self, data: &[f64]) -> Vec<BollingerOutput> {
        let n = self.period as f64;

        data.windows(self.period)
            .map(|window| {
                let mean = window.iter().sum::<f64>() / n;
                let var = window.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
                let half_width = self.k * var.sqrt();

                BollingerOutput {
                    upper: mean + half_width,
                    middle: mean,
                    lower: mean - half_width,
                }
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(high: f64, low: f64, close: f64) -> Bar {
        Bar::new(0, close, high, low, close, 0.0)
    }

    #[test]
    fn test_atr_steady_range() {
        let bars = vec![bar(1.1010, 1.0990, 1.1000); 6];
        let values = Atr::new(3).calculate(&bars);

        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| (v - 0.0020).abs() < 1e-12));
    }

    #[test]
    fn test_atr_counts_gaps() {
        // Previous close 10, next bar trades 12..13: true range is 3
        let bars = [bar(10.0, 10.0, 10.0), bar(13.0, 12.0, 12.5)];
        assert_eq!(Atr::new(1).calculate(&bars), vec![3.0]);
    }

    #[test]
    fn test_atr_wilder_step() {
        // Ranges 2, 2, then 5: seed 2, next (2 * 1 + 5) / 2
        let bars = [
            bar(11.0, 9.0, 10.0),
            bar(11.0, 9.0, 10.0),
            bar(11.0, 9.0, 10.0),
            bar(12.0, 7.0, 10.0),
        ];
        assert_eq!(Atr::new(2).calculate(&bars), vec![2.0, 3.5]);
    }

    #[test]
    fn test_atr_needs_period_plus_one_bars() {
        let atr = Atr::new(14);
        assert_eq!(atr.period(), 15);
        assert!(atr.latest(&vec![bar(2.0, 1.0, 1.5); 14]).is_none());
        assert!(atr.latest(&vec![bar(2.0, 1.0, 1.5); 15]).is_some());
    }

    #[test]
    fn test_bands_bracket_the_mean() {
        let data = [1.10, 1.12, 1.11, 1.13, 1.12, 1.14, 1.15];
        let bands = BollingerBands::with_params(5, 2.0).calculate(&data);

        assert_eq!(bands.len(), 3);
        for b in bands {
            assert!(b.upper > b.middle && b.middle > b.lower);
            assert!(((b.upper - b.middle) - (b.middle - b.lower)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_bands_known_values() {
        // mean 5, population std dev 2
        let b = BollingerBands::with_params(8, 2.0)
            .latest(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
            .unwrap();
        assert!((b.middle - 5.0).abs() < 1e-12);
        assert!((b.upper - 9.0).abs() < 1e-12);
        assert!((b.lower - 1.0).abs() < 1e-12);
        assert!((b.width() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_flat_bands_collapse() {
        let b = BollingerBands::with_params(4, 2.0).latest(&[5.0; 6]).unwrap();
        assert_eq!(b.width(), 0.0);
    }

    #[test]
    fn test_bands_short_input() {
        assert!(BollingerBands::new().calculate(&[1.0; 19]).is_empty());
    }
}
