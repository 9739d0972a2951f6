//! Moving averages behind the EMA, SMA and volume-average snapshot fields.

use signal_core::traits::Indicator;

/// Simple moving average over a sliding window.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "SMA period must be positive");
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![];
        }

        let n = self.period as f64;
        let seed: f64 = data[..self.period].iter().sum();

        std::iter::once(seed / n)
            .chain(
                data.iter()
                    .zip(&data[self.period..])
                    .scan(seed, |sum, (leaving, entering)| {
                        *sum += entering - leaving;
                        Some(*sum / n)
                    }),
            )
            .collect()
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential moving average, seeded with the SMA of the first window.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    alpha: f64,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "EMA period must be positive");
        Self {
            period,
            alpha: 2.0 / (period as f64 + 1.0),
        }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![];
        }

        let seed = data[..self.period].iter().sum::<f64>() / self.period as f64;
        let alpha = self.alpha;

        std::iter::once(seed)
            .chain(data[self.period..].iter().scan(seed, move |ema, &price| {
                *ema += alpha * (price - *ema);
                Some(*ema)
            }))
            .collect()
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn test_sma_window() {
        let values = Sma::new(2).calculate(&[1.0, 3.0, 5.0, 9.0]);
        assert_eq!(values.len(), 3);
        assert!(close(values[0], 2.0));
        assert!(close(values[1], 4.0));
        assert!(close(values[2], 7.0));
    }

    #[test]
    fn test_volume_average() {
        let volumes = [1000.0, 1200.0, 800.0, 1000.0, 3000.0];
        let avg = Sma::new(4).latest(&volumes).unwrap();
        assert!(close(avg, 1500.0));
    }

    #[test]
    fn test_short_input() {
        assert!(Sma::new(5).calculate(&[1.0, 2.0]).is_empty());
        assert!(Ema::new(5).calculate(&[1.0, 2.0]).is_empty());
        assert!(Ema::new(5).validate_data(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_ema_seed_and_step() {
        // alpha = 0.5, seed = mean(2, 3, 4) = 3
        let values = Ema::new(3).calculate(&[2.0, 3.0, 4.0, 7.0]);
        assert_eq!(values.len(), 2);
        assert!(close(values[0], 3.0));
        assert!(close(values[1], 5.0));
    }

    #[test]
    fn test_fast_ema_above_slow_when_rising() {
        let data: Vec<f64> = (0..60).map(|i| 1.08 + i as f64 * 0.0005).collect();
        let fast = Ema::new(9).latest(&data).unwrap();
        let slow = Ema::new(21).latest(&data).unwrap();
        assert!(fast > slow);
    }
}
