//! Condition evaluator trait.

use crate::types::{ConditionKind, ConditionResult, InstrumentSpec, ResolvedSnapshot};

/// A pure rule turning one snapshot into long/short flags.
///
/// Evaluators hold only their thresholds. They must not keep state between
/// calls and must not panic for any resolved snapshot.
pub trait ConditionEvaluator: Send + Sync {
    /// Which condition this evaluator implements.
    fn kind(&self) -> ConditionKind;

    /// Human readable name, used in results and logs.
    fn name(&self) -> &str;

    /// Evaluate the rule.
    fn evaluate(&self, snapshot: &ResolvedSnapshot, instrument: &InstrumentSpec)
        -> ConditionResult;

    /// Short description of the rule.
    fn description(&self) -> &str {
        ""
    }
}
