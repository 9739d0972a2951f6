//! Volume and volatility condition.

use signal_core::traits::ConditionEvaluator;
use signal_core::{ConditionKind, ConditionResult, InstrumentSpec, ResolvedSnapshot};

/// Direction-agnostic filter: both flags are set on a volume surge or when
/// the Bollinger bands are not squeezed relative to ATR.
///
/// A zero ATR counts as a squeeze.
#[derive(Debug, Clone)]
pub struct VolumeCondition {
    volume_multiplier: f64,
    squeeze_atr_ratio: f64,
}

impl VolumeCondition {
    pub fn new(volume_multiplier: f64, squeeze_atr_ratio: f64) -> Self {
        Self {
            volume_multiplier,
            squeeze_atr_ratio,
        }
    }

    fn is_squeezed(&self, s: &ResolvedSnapshot) -> bool {
        s.atr <= 0.0 || (s.bb_upper - s.bb_lower) < s.atr * self.squeeze_atr_ratio
    }
}

impl ConditionEvaluator for VolumeCondition {
    fn kind(&self) -> ConditionKind {
        ConditionKind::Volume
    }

    fn name(&self) -> &str {
        "Volume/Volatility"
    }

    fn evaluate(&self, s: &ResolvedSnapshot, _instrument: &InstrumentSpec) -> ConditionResult {
        let surge = s.current_volume > s.volume_sma * self.volume_multiplier;
        let squeezed = self.is_squeezed(s);
        let active = surge || !squeezed;

        ConditionResult::new(self.kind(), self.name(), active, active)
            .with_detail("volume", s.current_volume)
            .with_detail("volumeSMA", s.volume_sma)
            .with_detail("volumeSurge", surge)
            .with_detail("bandWidth", s.bb_upper - s.bb_lower)
            .with_detail("atr", s.atr)
            .with_detail("squeezed", squeezed)
    }

    fn description(&self) -> &str {
        "long and short: volume > volume SMA x multiplier or bands not squeezed against ATR"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_core::IndicatorSnapshot;

    fn evaluate(volume: f64, volume_sma: f64, width: f64, atr: f64) -> ConditionResult {
        let snapshot = IndicatorSnapshot {
            current_volume: Some(volume),
            volume_sma: Some(volume_sma),
            bb_upper: Some(100.0 + width / 2.0),
            bb_lower: Some(100.0 - width / 2.0),
            atr: Some(atr),
            ..IndicatorSnapshot::new(100.0)
        };
        VolumeCondition::new(1.2, 1.5)
            .evaluate(&snapshot.resolve().unwrap(), &InstrumentSpec::infer("TEST"))
    }

    #[test]
    fn test_volume_surge_overrides_squeeze() {
        let result = evaluate(2000.0, 1000.0, 1.0, 2.0);
        assert!(result.long_condition && result.short_condition);
        assert_eq!(result.details["squeezed"], serde_json::json!(true));
    }

    #[test]
    fn test_wide_bands_without_surge() {
        let result = evaluate(1000.0, 1000.0, 15.0, 2.0);
        assert!(result.long_condition && result.short_condition);
    }

    #[test]
    fn test_squeeze_without_surge() {
        let result = evaluate(1100.0, 1000.0, 2.9, 2.0);
        assert!(!result.is_directional());
    }

    #[test]
    fn test_zero_atr_is_squeezed() {
        let result = evaluate(0.0, 0.0, 10.0, 0.0);
        assert!(!result.is_directional());
    }
}
