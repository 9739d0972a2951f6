//! Trend condition: price against the trend SMA, fast EMA against slow EMA.

use signal_core::traits::ConditionEvaluator;
use signal_core::{ConditionKind, ConditionResult, InstrumentSpec, ResolvedSnapshot};

/// Long when price is above the trend SMA or the fast EMA is above the slow
/// EMA; short on the mirrored comparisons.
///
/// The two clauses are independent, so a snapshot can favor both
/// directions at once.
#[derive(Debug, Clone, Default)]
pub struct TrendCondition;

impl TrendCondition {
    pub fn new() -> Self {
        Self
    }
}

impl ConditionEvaluator for TrendCondition {
    fn kind(&self) -> ConditionKind {
        ConditionKind::Trend
    }

    fn name(&self) -> &str {
        "Trend"
    }

    fn evaluate(&self, s: &ResolvedSnapshot, _instrument: &InstrumentSpec) -> ConditionResult {
        let above_sma = s.current_price > s.sma_trend;
        let below_sma = s.current_price < s.sma_trend;
        let ema_bullish = s.ema_fast > s.ema_slow;
        let ema_bearish = s.ema_fast < s.ema_slow;

        ConditionResult::new(
            self.kind(),
            self.name(),
            above_sma || ema_bullish,
            below_sma || ema_bearish,
        )
        .with_detail("price", s.current_price)
        .with_detail("smaTrend", s.sma_trend)
        .with_detail("emaFast", s.ema_fast)
        .with_detail("emaSlow", s.ema_slow)
    }

    fn description(&self) -> &str {
        "long: price > SMA trend or EMA fast > EMA slow; short: mirrored"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_core::IndicatorSnapshot;

    fn evaluate(snapshot: IndicatorSnapshot) -> ConditionResult {
        TrendCondition::new().evaluate(
            &snapshot.resolve().unwrap(),
            &InstrumentSpec::infer("EURUSD"),
        )
    }

    #[test]
    fn test_aligned_uptrend() {
        let result = evaluate(IndicatorSnapshot {
            sma_trend: Some(102.0),
            ema_fast: Some(105.0),
            ema_slow: Some(100.0),
            ..IndicatorSnapshot::new(110.0)
        });
        assert!(result.long_condition);
        assert!(!result.short_condition);
        assert_eq!(result.details["smaTrend"], serde_json::json!(102.0));
    }

    #[test]
    fn test_conflicting_clauses_set_both_flags() {
        // Price above the SMA but fast EMA below slow EMA
        let result = evaluate(IndicatorSnapshot {
            sma_trend: Some(100.0),
            ema_fast: Some(98.0),
            ema_slow: Some(99.0),
            ..IndicatorSnapshot::new(101.0)
        });
        assert!(result.long_condition);
        assert!(result.short_condition);
    }

    #[test]
    fn test_missing_fields_are_flat() {
        let result = evaluate(IndicatorSnapshot::new(1.1));
        assert!(!result.is_directional());
    }
}
