//! Scored and trading signal types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ConditionKind, ConditionResult};

/// Number of conditions, and therefore the highest possible strength.
pub const MAX_SIGNAL_STRENGTH: u8 = 6;

/// Value of the `type` field on every trading signal.
pub const TRADING_SIGNAL_TYPE: &str = "TRADING_SIGNAL";

/// Directional lean of a scored signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bias::Bullish => write!(f, "BULLISH"),
            Bias::Bearish => write!(f, "BEARISH"),
            Bias::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Trade direction of an actionable signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
}

impl Action {
    /// +1 for buys, -1 for sells.
    pub fn sign(&self) -> f64 {
        match self {
            Action::Buy => 1.0,
            Action::Sell => -1.0,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "BUY"),
            Action::Sell => write!(f, "SELL"),
        }
    }
}

/// Stop and target distances derived from ATR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedMove {
    /// Distance from entry to the stop
    pub stop_loss: f64,
    /// Distance from entry to the target
    pub take_profit: f64,
    /// Target distance divided by stop distance
    pub risk_reward: f64,
}

/// Result of scoring one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSignal {
    pub symbol: String,
    pub bias: Bias,
    /// Number of conditions agreeing with the bias (0..=6)
    pub strength: u8,
    pub max_strength: u8,
    pub long_count: u8,
    pub short_count: u8,
    pub conditions: Vec<ConditionResult>,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub atr: f64,
    pub expected_move: ExpectedMove,
    /// strength / max_strength * 100
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ScoredSignal {
    /// Confidence percentage for a strength value.
    pub fn confidence_for(strength: u8) -> f64 {
        f64::from(strength) / f64::from(MAX_SIGNAL_STRENGTH) * 100.0
    }

    /// Look up the result of one condition.
    pub fn condition(&self, kind: ConditionKind) -> Option<&ConditionResult> {
        self.conditions.iter().find(|c| c.kind == kind)
    }

    pub fn is_neutral(&self) -> bool {
        self.bias == Bias::Neutral
    }
}

/// A scored signal accepted by the gate and ready for the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingSignal {
    /// Unique id: `signal_<epoch millis>_<random>`
    pub id: String,
    /// Always [`TRADING_SIGNAL_TYPE`]
    #[serde(rename = "type")]
    pub signal_type: String,
    pub action: Action,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    /// Absolute distance between entry and stop
    pub risk: f64,
    #[serde(flatten)]
    pub scored: ScoredSignal,
}

impl TradingSignal {
    /// Generate an id for a signal created at `timestamp`.
    pub fn make_id(timestamp: DateTime<Utc>) -> String {
        let random = uuid::Uuid::new_v4().simple().to_string();
        format!("signal_{}_{}", timestamp.timestamp_millis(), &random[..9])
    }

    pub fn symbol(&self) -> &str {
        &self.scored.symbol
    }

    pub fn strength(&self) -> u8 {
        self.scored.strength
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.scored.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored() -> ScoredSignal {
        ScoredSignal {
            symbol: "EURUSD".to_string(),
            bias: Bias::Bullish,
            strength: 5,
            max_strength: MAX_SIGNAL_STRENGTH,
            long_count: 5,
            short_count: 2,
            conditions: vec![ConditionResult::new(
                ConditionKind::Trend,
                "Trend",
                true,
                false,
            )],
            timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            price: 1.1,
            atr: 0.001,
            expected_move: ExpectedMove::default(),
            confidence: ScoredSignal::confidence_for(5),
            reason: None,
        }
    }

    #[test]
    fn test_confidence_for() {
        assert_eq!(ScoredSignal::confidence_for(0), 0.0);
        assert_eq!(ScoredSignal::confidence_for(6), 100.0);
        assert_eq!(ScoredSignal::confidence_for(3), 50.0);
    }

    #[test]
    fn test_condition_lookup() {
        let signal = scored();
        assert!(signal.condition(ConditionKind::Trend).is_some());
        assert!(signal.condition(ConditionKind::Rsi).is_none());
    }

    #[test]
    fn test_make_id_format() {
        let ts = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let id = TradingSignal::make_id(ts);
        assert!(id.starts_with("signal_1700000000123_"));
        assert_eq!(id.len(), "signal_1700000000123_".len() + 9);
        assert_ne!(id, TradingSignal::make_id(ts));
    }

    #[test]
    fn test_trading_signal_serialization() {
        let signal = TradingSignal {
            id: "signal_1_abc".to_string(),
            signal_type: TRADING_SIGNAL_TYPE.to_string(),
            action: Action::Buy,
            entry: 1.1,
            stop_loss: 1.09,
            take_profit: 1.12,
            risk: 0.01,
            scored: scored(),
        };

        let value = serde_json::to_value(&signal).unwrap();
        assert_eq!(value["type"], "TRADING_SIGNAL");
        assert_eq!(value["action"], "BUY");
        assert_eq!(value["bias"], "BULLISH");
        assert_eq!(value["symbol"], "EURUSD");
        assert_eq!(value["stopLoss"], 1.09);

        let back: TradingSignal = serde_json::from_value(value).unwrap();
        assert_eq!(back, signal);
    }
}
