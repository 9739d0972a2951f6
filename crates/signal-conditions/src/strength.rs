//! Strength condition: the EMA gap measured in pips.

use signal_core::traits::ConditionEvaluator;
use signal_core::{ConditionKind, ConditionResult, InstrumentSpec, ResolvedSnapshot};
use signal_indicators::trend_strength;

/// Direction-agnostic filter: both flags are set when the gap between the
/// fast and slow EMA exceeds `min_trend_strength` pips.
#[derive(Debug, Clone)]
pub struct StrengthCondition {
    min_trend_strength: f64,
}

impl StrengthCondition {
    pub fn new(min_trend_strength: f64) -> Self {
        Self { min_trend_strength }
    }
}

impl ConditionEvaluator for StrengthCondition {
    fn kind(&self) -> ConditionKind {
        ConditionKind::Strength
    }

    fn name(&self) -> &str {
        "Strength"
    }

    fn evaluate(&self, s: &ResolvedSnapshot, instrument: &InstrumentSpec) -> ConditionResult {
        let strength = trend_strength(s.ema_fast, s.ema_slow, instrument);
        let strong = strength > self.min_trend_strength;

        ConditionResult::new(self.kind(), self.name(), strong, strong)
            .with_detail("trendStrength", strength)
            .with_detail("minTrendStrength", self.min_trend_strength)
            .with_detail("pipSize", instrument.pip_size)
    }

    fn description(&self) -> &str {
        "long and short: |EMA fast - EMA slow| in pips > min trend strength"
    }
}
