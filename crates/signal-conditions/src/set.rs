//! The ordered set of condition evaluators used by the scorer.

use serde::{Deserialize, Serialize};
use signal_core::traits::ConditionEvaluator;
use signal_core::{ConditionKind, ConditionResult, InstrumentSpec, ResolvedSnapshot};

use crate::config::EngineConfig;
use crate::{
    PriceActionCondition, PricePositionCondition, RsiMomentumCondition, StrengthCondition,
    TrendCondition, VolumeCondition,
};

/// Information about one registered condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionInfo {
    pub kind: ConditionKind,
    pub name: String,
    pub description: String,
}

/// Evaluators run on every tick, in order.
pub struct ConditionSet {
    evaluators: Vec<Box<dyn ConditionEvaluator>>,
}

impl ConditionSet {
    /// The six standard conditions configured from `config`.
    pub fn standard(config: &EngineConfig) -> Self {
        Self {
            evaluators: vec![
                Box::new(TrendCondition::new()),
                Box::new(StrengthCondition::new(config.min_trend_strength)),
                Box::new(RsiMomentumCondition::from_config(config)),
                Box::new(PricePositionCondition::new()),
                Box::new(PriceActionCondition::new()),
                Box::new(VolumeCondition::new(
                    config.volume_multiplier,
                    config.squeeze_atr_ratio,
                )),
            ],
        }
    }

    /// Evaluate every condition.
    pub fn evaluate(
        &self,
        snapshot: &ResolvedSnapshot,
        instrument: &InstrumentSpec,
    ) -> Vec<ConditionResult> {
        self.evaluators
            .iter()
            .map(|e| e.evaluate(snapshot, instrument))
            .collect()
    }

    /// Describe the registered conditions.
    pub fn list(&self) -> Vec<ConditionInfo> {
        self.evaluators
            .iter()
            .map(|e| ConditionInfo {
                kind: e.kind(),
                name: e.name().to_string(),
                description: e.description().to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }
}
