//! Builds [`IndicatorSnapshot`]s from a window of bars.

use serde::{Deserialize, Serialize};
use signal_core::traits::{Indicator, MultiOutputIndicator, Validate};
use signal_core::{Bar, ConfigError, IndicatorSnapshot};

use crate::momentum::{Macd, Rsi};
use crate::moving_average::{Ema, Sma};
use crate::volatility::{Atr, BollingerBands};

/// Periods used for every indicator in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorPeriods {
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub sma_trend: usize,
    pub rsi: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub atr: usize,
    pub volume_sma: usize,
}

impl Default for IndicatorPeriods {
    fn default() -> Self {
        Self {
            ema_fast: 9,
            ema_slow: 21,
            sma_trend: 50,
            rsi: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            atr: 14,
            volume_sma: 20,
        }
    }
}

impl Validate for IndicatorPeriods {
    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("ema_fast", self.ema_fast),
            ("ema_slow", self.ema_slow),
            ("sma_trend", self.sma_trend),
            ("rsi", self.rsi),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("atr", self.atr),
            ("volume_sma", self.volume_sma),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::invalid(field, "must be greater than 0"));
            }
        }

        if self.ema_fast >= self.ema_slow {
            return Err(ConfigError::invalid(
                "ema_fast",
                format!("must be below ema_slow ({})", self.ema_slow),
            ));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(ConfigError::invalid(
                "macd_fast",
                format!("must be below macd_slow ({})", self.macd_slow),
            ));
        }
        if self.bollinger_period < 2 {
            return Err(ConfigError::invalid(
                "bollinger_period",
                "must be at least 2",
            ));
        }
        if !(self.bollinger_std_dev.is_finite() && self.bollinger_std_dev > 0.0) {
            return Err(ConfigError::invalid(
                "bollinger_std_dev",
                "must be a positive number",
            ));
        }

        Ok(())
    }
}

/// Computes every snapshot field from a bar window, oldest first.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    ema_fast: Ema,
    ema_slow: Ema,
    sma_trend: Sma,
    rsi: Rsi,
    macd: Macd,
    bollinger: BollingerBands,
    atr: Atr,
    volume_sma: Sma,
}

impl SnapshotBuilder {
    /// Create a builder. Fails if the periods are invalid.
    pub fn new(periods: &IndicatorPeriods) -> Result<Self, ConfigError> {
        periods.validate()?;

        Ok(Self {
            ema_fast: Ema::new(periods.ema_fast),
            ema_slow: Ema::new(periods.ema_slow),
            sma_trend: Sma::new(periods.sma_trend),
            rsi: Rsi::new(periods.rsi),
            macd: Macd::with_periods(periods.macd_fast, periods.macd_slow, periods.macd_signal),
            bollinger: BollingerBands::with_params(
                periods.bollinger_period,
                periods.bollinger_std_dev,
            ),
            atr: Atr::new(periods.atr),
            volume_sma: Sma::new(periods.volume_sma),
        })
    }

    /// Bars needed before every field can be filled.
    pub fn warmup(&self) -> usize {
        [
            self.ema_fast.period(),
            self.ema_slow.period(),
            self.sma_trend.period(),
            self.rsi.period(),
            self.macd.period(),
            self.bollinger.period(),
            self.atr.period(),
            self.volume_sma.period(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Build a snapshot from `bars`. Fields without enough history stay `None`.
    ///
    /// Returns `None` for an empty window.
    pub fn build(&self, bars: &[Bar]) -> Option<IndicatorSnapshot> {
        let last = bars.last()?;

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

        let macd = self.macd.latest(&closes);
        let bands = self.bollinger.latest(&closes);

        Some(IndicatorSnapshot {
            current_price: Some(last.close),
            previous_price: closes.len().checked_sub(2).map(|i| closes[i]),
            ema_fast: self.ema_fast.latest(&closes),
            ema_slow: self.ema_slow.latest(&closes),
            sma_trend: self.sma_trend.latest(&closes),
            rsi: self.rsi.latest(&closes),
            macd_main: macd.map(|m| m.macd),
            macd_signal: macd.map(|m| m.signal),
            bb_upper: bands.map(|b| b.upper),
            bb_middle: bands.map(|b| b.middle),
            bb_lower: bands.map(|b| b.lower),
            atr: self.atr.latest(bars),
            current_volume: Some(last.volume),
            volume_sma: self.volume_sma.latest(&volumes),
        })
    }
}
