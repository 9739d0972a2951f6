//! Price position relative to the Bollinger halves and the fast EMA.

use signal_core::traits::ConditionEvaluator;
use signal_core::{ConditionKind, ConditionResult, InstrumentSpec, ResolvedSnapshot};

/// Long when price sits in the lower Bollinger half or above the fast EMA.
/// Short when price sits in the upper half or below the fast EMA.
#[derive(Debug, Clone, Default)]
pub struct PricePositionCondition;

impl PricePositionCondition {
    pub fn new() -> Self {
        Self
    }
}

impl ConditionEvaluator for PricePositionCondition {
    fn kind(&self) -> ConditionKind {
        ConditionKind::Position
    }

    fn name(&self) -> &str {
        "Price Position"
    }

    fn evaluate(&self, s: &ResolvedSnapshot, _instrument: &InstrumentSpec) -> ConditionResult {
        let price = s.current_price;
        let lower_half = price >= s.bb_lower && price <= s.bb_middle;
        let upper_half = price >= s.bb_middle && price <= s.bb_upper;

        ConditionResult::new(
            self.kind(),
            self.name(),
            lower_half || price > s.ema_fast,
            upper_half || price < s.ema_fast,
        )
        .with_detail("price", price)
        .with_detail("bbUpper", s.bb_upper)
        .with_detail("bbMiddle", s.bb_middle)
        .with_detail("bbLower", s.bb_lower)
        .with_detail("emaFast", s.ema_fast)
    }

    fn description(&self) -> &str {
        "long: BB lower <= price <= BB middle or price > EMA fast; short: BB middle <= price <= BB upper or price < EMA fast"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_core::IndicatorSnapshot;

    fn evaluate(price: f64, ema_fast: f64) -> ConditionResult {
        let snapshot = IndicatorSnapshot {
            ema_fast: Some(ema_fast),
            bb_upper: Some(115.0),
            bb_middle: Some(108.0),
            bb_lower: Some(100.0),
            ..IndicatorSnapshot::new(price)
        };
        PricePositionCondition::new()
            .evaluate(&snapshot.resolve().unwrap(), &InstrumentSpec::infer("TEST"))
    }

    #[test]
    fn test_upper_half_above_ema() {
        let result = evaluate(110.0, 105.0);
        assert!(result.long_condition);
        assert!(result.short_condition);
    }

    #[test]
    fn test_lower_half_below_ema() {
        let result = evaluate(104.0, 106.0);
        assert!(result.long_condition);
        assert!(result.short_condition);
    }

    #[test]
    fn test_above_upper_band() {
        let result = evaluate(120.0, 110.0);
        assert!(result.long_condition);
        assert!(!result.short_condition);
    }

    #[test]
    fn test_below_lower_band() {
        let result = evaluate(95.0, 100.0);
        assert!(!result.long_condition);
        assert!(result.short_condition);
    }

    #[test]
    fn test_missing_bands_collapse_to_price() {
        // All bands default to price, so both halves match
        let result = PricePositionCondition::new().evaluate(
            &IndicatorSnapshot::new(1.1).resolve().unwrap(),
            &InstrumentSpec::infer("EURUSD"),
        );
        assert!(result.long_condition);
        assert!(result.short_condition);
    }
}
