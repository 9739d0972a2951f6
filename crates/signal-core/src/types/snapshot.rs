//! Indicator snapshots supplied by the host for one symbol at one tick.

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// Latest indicator values for one symbol.
///
/// Every field is optional so hosts can hand over partial data. Defaults are
/// applied once in [`IndicatorSnapshot::resolve`], never inside evaluators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ema_fast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ema_slow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma_trend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd_main: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bb_upper: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bb_middle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bb_lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_volume: Option<f64>,
    #[serde(
        default,
        rename = "volumeSMA",
        alias = "volumeSma",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_sma: Option<f64>,
}

impl IndicatorSnapshot {
    /// Create a snapshot holding only the current price.
    pub fn new(current_price: f64) -> Self {
        Self {
            current_price: Some(current_price),
            ..Default::default()
        }
    }

    /// Apply the neutral defaults and produce a fully populated snapshot.
    ///
    /// Price-like fields fall back to the current price so every strict
    /// comparison against price fails in both directions. RSI falls back to
    /// 50; MACD, ATR and volume fields fall back to zero. Non-finite values
    /// count as missing.
    pub fn resolve(&self) -> Result<ResolvedSnapshot, ScoreError> {
        let price = finite(self.current_price).ok_or(ScoreError::InsufficientData {
            field: "currentPrice",
        })?;
        let or_price = |v: Option<f64>| finite(v).unwrap_or(price);
        let or_zero = |v: Option<f64>| finite(v).unwrap_or(0.0);

        Ok(ResolvedSnapshot {
            current_price: price,
            previous_price: or_price(self.previous_price),
            ema_fast: or_price(self.ema_fast),
            ema_slow: or_price(self.ema_slow),
            sma_trend: or_price(self.sma_trend),
            rsi: finite(self.rsi).unwrap_or(50.0),
            macd_main: or_zero(self.macd_main),
            macd_signal: or_zero(self.macd_signal),
            bb_upper: or_price(self.bb_upper),
            bb_middle: or_price(self.bb_middle),
            bb_lower: or_price(self.bb_lower),
            atr: or_zero(self.atr),
            current_volume: or_zero(self.current_volume),
            volume_sma: or_zero(self.volume_sma),
        })
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Snapshot with every default resolved. Evaluators only ever see this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSnapshot {
    pub current_price: f64,
    pub previous_price: f64,
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub sma_trend: f64,
    pub rsi: f64,
    pub macd_main: f64,
    pub macd_signal: f64,
    pub bb_upper: f64,
    pub bb_middle: f64,
    pub bb_lower: f64,
    pub atr: f64,
    pub current_volume: f64,
    pub volume_sma: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_requires_price() {
        let snapshot = IndicatorSnapshot::default();
        assert_eq!(
            snapshot.resolve(),
            Err(ScoreError::InsufficientData {
                field: "currentPrice"
            })
        );

        let snapshot = IndicatorSnapshot {
            current_price: Some(f64::NAN),
            ..Default::default()
        };
        assert!(snapshot.resolve().is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = IndicatorSnapshot::new(1.25).resolve().unwrap();

        assert_eq!(resolved.current_price, 1.25);
        assert_eq!(resolved.previous_price, 1.25);
        assert_eq!(resolved.ema_fast, 1.25);
        assert_eq!(resolved.bb_lower, 1.25);
        assert_eq!(resolved.rsi, 50.0);
        assert_eq!(resolved.macd_main, 0.0);
        assert_eq!(resolved.atr, 0.0);
        assert_eq!(resolved.volume_sma, 0.0);
    }

    #[test]
    fn test_non_finite_optional_is_missing() {
        let snapshot = IndicatorSnapshot {
            current_price: Some(100.0),
            rsi: Some(f64::INFINITY),
            atr: Some(f64::NAN),
            ..Default::default()
        };
        let resolved = snapshot.resolve().unwrap();
        assert_eq!(resolved.rsi, 50.0);
        assert_eq!(resolved.atr, 0.0);
    }

    #[test]
    fn test_deserialize_host_json() {
        let json = r#"{
            "currentPrice": 110,
            "previousPrice": 108,
            "emaFast": 105,
            "volumeSMA": 1000
        }"#;
        let snapshot: IndicatorSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.current_price, Some(110.0));
        assert_eq!(snapshot.previous_price, Some(108.0));
        assert_eq!(snapshot.ema_fast, Some(105.0));
        assert_eq!(snapshot.volume_sma, Some(1000.0));
        assert_eq!(snapshot.rsi, None);
    }
}
