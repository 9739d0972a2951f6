//! Price action condition: current price against the previous price.

use signal_core::traits::ConditionEvaluator;
use signal_core::{ConditionKind, ConditionResult, InstrumentSpec, ResolvedSnapshot};

/// Long on an up tick, short on a down tick. Only the two scalar prices
/// are compared; bar shape is not inspected.
#[derive(Debug, Clone, Default)]
pub struct PriceActionCondition;

impl PriceActionCondition {
    pub fn new() -> Self {
        Self
    }
}

impl ConditionEvaluator for PriceActionCondition {
    fn kind(&self) -> ConditionKind {
        ConditionKind::PriceAction
    }

    fn name(&self) -> &str {
        "Price Action"
    }

    fn evaluate(&self, s: &ResolvedSnapshot, _instrument: &InstrumentSpec) -> ConditionResult {
        ConditionResult::new(
            self.kind(),
            self.name(),
            s.current_price > s.previous_price,
            s.current_price < s.previous_price,
        )
        .with_detail("price", s.current_price)
        .with_detail("previousPrice", s.previous_price)
        .with_detail("change", s.current_price - s.previous_price)
    }

    fn description(&self) -> &str {
        "long: price > previous price; short: price < previous price"
    }
}
