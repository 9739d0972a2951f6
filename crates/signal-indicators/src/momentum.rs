//! Momentum indicators feeding the RSI and MACD snapshot fields.

use serde::{Deserialize, Serialize};
use signal_core::traits::{Indicator, MultiOutputIndicator};

use crate::moving_average::Ema;

/// Relative Strength Index with Wilder's smoothing.
///
/// Flat input reads 50, only gains read 100, only losses read 0.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "RSI period must be positive");
        Self { period }
    }
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    match (avg_gain > 0.0, avg_loss > 0.0) {
        (_, true) => 100.0 - 100.0 / (1.0 + avg_gain / avg_loss),
        (true, false) => 100.0,
        (false, false) => 50.0,
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() <= self.period {
            return vec![];
        }

        let n = self.period as f64;
        let mut changes = data.windows(2).map(|w| w[1] - w[0]);

        // Seed with plain averages over the first period
        let (gain_sum, loss_sum) = changes
            .by_ref()
            .take(self.period)
            .fold((0.0, 0.0), |(g, l), c| (g + c.max(0.0), l + (-c).max(0.0)));
        let mut avg_gain = gain_sum / n;
        let mut avg_loss = loss_sum / n;

        let mut values = Vec::with_capacity(data.len() - self.period);
        values.push(rsi_value(avg_gain, avg_loss));

        for change in changes {
            avg_gain = (avg_gain * (n - 1.0) + change.max(0.0)) / n;
            avg_loss = (avg_loss * (n - 1.0) + (-change).max(0.0)) / n;
            values.push(rsi_value(avg_gain, avg_loss));
        }

        values
    }

    fn period(&self) -> usize {
        self.period + 1
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// One MACD reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// Fast EMA minus slow EMA
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdOutput {
    pub fn new(macd: f64, signal: f64) -> Self {
        Self {
            macd,
            signal,
            histogram: macd - signal,
        }
    }

    /// MACD line above its signal line.
    pub fn is_bullish(&self) -> bool {
        self.macd > self.signal
    }
}

/// Moving Average Convergence Divergence built from three [`Ema`]s.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
}

impl Macd {
    /// The common 12/26/9 configuration.
    pub fn new() -> Self {
        Self::with_periods(12, 26, 9)
    }

    pub fn with_periods(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0 && signal > 0, "MACD periods must be positive");
        assert!(fast < slow, "MACD fast period must be shorter than the slow one");
        Self { fast, slow, signal }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    fn calculate(&self, data: &[f64]) -> Vec<MacdOutput> {
        if data.len() < self.period() {
            return vec![];
        }

        let fast = Ema::new(self.fast).calculate(data);
        let slow = Ema::new(self.slow).calculate(data);

        // Both EMAs end on the last bar; drop the fast EMA's extra head
        let line: Vec<f64> = fast[fast.len() - slow.len()..]
            .iter()
            .zip(&slow)
            .map(|(f, s)| f - s)
            .collect();

        let signal = Ema::new(self.signal).calculate(&line);
        line[line.len() - signal.len()..]
            .iter()
            .zip(&signal)
            .map(|(&macd, &sig)| MacdOutput::new(macd, sig))
            .collect()
    }

    fn period(&self) -> usize {
        self.slow + self.signal
    }

    fn name(&self) -> &str {
        "MACD"
    }
}
