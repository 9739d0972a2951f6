//! Daily statistics over an engine's history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::state::EngineState;
use crate::EngineConfig;

/// Summary of the current UTC day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    pub date: NaiveDate,
    /// History entries dated today
    pub signals_today: usize,
    pub trades_remaining: u32,
    /// Mean strength of today's entries, 0 when there are none
    pub average_strength: f64,
}

impl TodayStats {
    /// Compute the stats for the UTC date of `now`.
    ///
    /// The daily counter only counts when it belongs to today; a stale
    /// counter from an earlier date leaves the full allowance.
    pub fn compute(state: &EngineState, config: &EngineConfig, now: DateTime<Utc>) -> Self {
        let date = now.date_naive();

        let strengths: Vec<u8> = state
            .history(usize::MAX)
            .filter(|s| s.timestamp().date_naive() == date)
            .map(|s| s.strength())
            .collect();

        let average_strength = if strengths.is_empty() {
            0.0
        } else {
            strengths.iter().map(|s| f64::from(*s)).sum::<f64>() / strengths.len() as f64
        };

        let used = if state.last_trade_date() == Some(date) {
            state.daily_trades()
        } else {
            0
        };

        Self {
            date,
            signals_today: strengths.len(),
            trades_remaining: config.max_trades_per_day.saturating_sub(used),
            average_strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::TradeGate;
    use chrono::{Duration, TimeZone};
    use signal_core::{
        Bias, ConditionKind, ConditionResult, ExpectedMove, ScoredSignal, MAX_SIGNAL_STRENGTH,
    };

    fn scored(strength: u8, timestamp: DateTime<Utc>) -> ScoredSignal {
        ScoredSignal {
            symbol: "TEST".to_string(),
            bias: Bias::Bullish,
            strength,
            max_strength: MAX_SIGNAL_STRENGTH,
            long_count: strength,
            short_count: 0,
            conditions: ConditionKind::ALL
                .iter()
                .map(|k| ConditionResult::new(*k, k.key(), true, true))
                .collect(),
            timestamp,
            price: 100.0,
            atr: 1.0,
            expected_move: ExpectedMove::default(),
            confidence: ScoredSignal::confidence_for(strength),
            reason: None,
        }
    }

    #[test]
    fn test_empty_state() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let stats = TodayStats::compute(&EngineState::new(), &EngineConfig::default(), now);

        assert_eq!(stats.date, now.date_naive());
        assert_eq!(stats.signals_today, 0);
        assert_eq!(stats.trades_remaining, 5);
        assert_eq!(stats.average_strength, 0.0);
    }

    #[test]
    fn test_counts_only_today() {
        let config = EngineConfig {
            signal_cooldown_ms: 0,
            ..Default::default()
        };
        let mut gate = TradeGate::new(config.clone());
        let yesterday = Utc.with_ymd_and_hms(2024, 1, 9, 12, 0, 0).unwrap();
        let today = yesterday + Duration::days(1);

        gate.try_emit(&scored(6, yesterday), yesterday).unwrap();
        gate.try_emit(&scored(4, today), today).unwrap();
        gate.try_emit(&scored(5, today), today).unwrap();

        let stats = TodayStats::compute(gate.state(), &config, today);
        assert_eq!(stats.signals_today, 2);
        assert_eq!(stats.trades_remaining, 3);
        assert!((stats.average_strength - 4.5).abs() < 1e-12);

        // Next day without trades: full allowance again
        let stats = TodayStats::compute(gate.state(), &config, today + Duration::days(1));
        assert_eq!(stats.signals_today, 0);
        assert_eq!(stats.trades_remaining, 5);
    }

    #[test]
    fn test_scored_before_midnight_accepted_after() {
        let config = EngineConfig::default();
        let mut gate = TradeGate::new(config.clone());
        let scored_at = Utc.with_ymd_and_hms(2024, 1, 10, 23, 59, 59).unwrap();
        let accepted_at = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 1).unwrap();

        let signal = gate.try_emit(&scored(6, scored_at), accepted_at).unwrap();
        assert_eq!(signal.timestamp(), accepted_at);
        assert_eq!(gate.state().last_trade_date(), Some(accepted_at.date_naive()));

        let stats = TodayStats::compute(gate.state(), &config, accepted_at);
        assert_eq!(stats.signals_today, 1);
        assert_eq!(stats.trades_remaining, 4);
        assert_eq!(stats.average_strength, 6.0);

        let stats = TodayStats::compute(gate.state(), &config, scored_at);
        assert_eq!(stats.signals_today, 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let stats = TodayStats::compute(&EngineState::new(), &EngineConfig::default(), now);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["date"], "2024-01-10");
        assert_eq!(json["tradesRemaining"], 5);
    }
}
