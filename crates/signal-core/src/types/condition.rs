//! Condition results produced by the evaluators.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The six conditions evaluated on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionKind {
    Trend,
    Strength,
    Rsi,
    Position,
    PriceAction,
    Volume,
}

impl ConditionKind {
    /// All kinds in evaluation order.
    pub const ALL: [ConditionKind; 6] = [
        ConditionKind::Trend,
        ConditionKind::Strength,
        ConditionKind::Rsi,
        ConditionKind::Position,
        ConditionKind::PriceAction,
        ConditionKind::Volume,
    ];

    /// Stable key used in details and logs.
    pub fn key(&self) -> &'static str {
        match self {
            ConditionKind::Trend => "trend",
            ConditionKind::Strength => "strength",
            ConditionKind::Rsi => "rsi",
            ConditionKind::Position => "position",
            ConditionKind::PriceAction => "priceAction",
            ConditionKind::Volume => "volume",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome of one condition evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionResult {
    /// Human readable name
    pub name: String,
    /// Which condition produced this result
    pub kind: ConditionKind,
    /// Condition favors a long entry
    pub long_condition: bool,
    /// Condition favors a short entry
    pub short_condition: bool,
    /// Values the decision was based on
    #[serde(default)]
    pub details: BTreeMap<String, Value>,
}

impl ConditionResult {
    pub fn new(
        kind: ConditionKind,
        name: impl Into<String>,
        long_condition: bool,
        short_condition: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            long_condition,
            short_condition,
            details: BTreeMap::new(),
        }
    }

    /// Attach a detail value.
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    /// True when at least one direction is satisfied.
    pub fn is_directional(&self) -> bool {
        self.long_condition || self.short_condition
    }
}
