//! Turns one indicator snapshot into a [`ScoredSignal`].

use chrono::{DateTime, Utc};
use signal_core::{
    Bias, ExpectedMove, IndicatorSnapshot, InstrumentSpec, ScoreError, ScoredSignal,
    MAX_SIGNAL_STRENGTH,
};
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::set::ConditionSet;

/// Reason attached to signals scored outside the trading session.
pub const OUTSIDE_SESSION_REASON: &str = "Outside trading hours";

/// Counts condition votes into a bias and strength.
///
/// Holds no state between calls; the only input besides the snapshot is the
/// supplied `now`.
pub struct SignalScorer {
    config: EngineConfig,
    conditions: ConditionSet,
}

impl SignalScorer {
    /// Create a scorer with the standard condition set.
    pub fn new(config: EngineConfig) -> Self {
        let conditions = ConditionSet::standard(&config);
        Self { config, conditions }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn conditions(&self) -> &ConditionSet {
        &self.conditions
    }

    /// Score a snapshot for `symbol` at `now`.
    ///
    /// Fails only when the snapshot has no usable current price. Outside the
    /// trading session the result is a NEUTRAL signal with no conditions.
    pub fn score(
        &self,
        symbol: &str,
        snapshot: &IndicatorSnapshot,
        instrument: &InstrumentSpec,
        now: DateTime<Utc>,
    ) -> Result<ScoredSignal, ScoreError> {
        let resolved = snapshot.resolve()?;

        if !self.config.session.is_open(now, instrument) {
            trace!(symbol, %now, "Outside trading session");
            return Ok(ScoredSignal {
                symbol: symbol.to_string(),
                bias: Bias::Neutral,
                strength: 0,
                max_strength: MAX_SIGNAL_STRENGTH,
                long_count: 0,
                short_count: 0,
                conditions: Vec::new(),
                timestamp: now,
                price: resolved.current_price,
                atr: resolved.atr,
                expected_move: ExpectedMove::default(),
                confidence: 0.0,
                reason: Some(OUTSIDE_SESSION_REASON.to_string()),
            });
        }

        let conditions = self.conditions.evaluate(&resolved, instrument);
        let long_count = conditions.iter().filter(|c| c.long_condition).count() as u8;
        let short_count = conditions.iter().filter(|c| c.short_condition).count() as u8;

        let min = self.config.min_signal_strength;
        let (bias, strength) = if long_count >= min {
            (Bias::Bullish, long_count)
        } else if short_count >= min {
            (Bias::Bearish, short_count)
        } else {
            (Bias::Neutral, long_count.max(short_count))
        };

        let stop_loss = resolved.atr * self.config.stop_loss_atr_mult;
        let expected_move = ExpectedMove {
            stop_loss,
            take_profit: stop_loss * self.config.take_profit_ratio,
            risk_reward: self.config.take_profit_ratio,
        };

        debug!(
            symbol,
            %bias,
            strength,
            long_count,
            short_count,
            "Scored snapshot"
        );

        Ok(ScoredSignal {
            symbol: symbol.to_string(),
            bias,
            strength,
            max_strength: MAX_SIGNAL_STRENGTH,
            long_count,
            short_count,
            conditions,
            timestamp: now,
            price: resolved.current_price,
            atr: resolved.atr,
            expected_move,
            confidence: ScoredSignal::confidence_for(strength),
            reason: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use signal_core::ConditionKind;

    fn wednesday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
    }

    fn bullish_snapshot() -> IndicatorSnapshot {
        IndicatorSnapshot {
            current_price: Some(110.0),
            previous_price: Some(108.0),
            ema_fast: Some(105.0),
            ema_slow: Some(100.0),
            sma_trend: Some(102.0),
            rsi: Some(35.0),
            macd_main: Some(1.0),
            macd_signal: Some(0.5),
            bb_upper: Some(115.0),
            bb_middle: Some(108.0),
            bb_lower: Some(100.0),
            atr: Some(2.0),
            current_volume: Some(2000.0),
            volume_sma: Some(1000.0),
        }
    }

    fn instrument() -> InstrumentSpec {
        InstrumentSpec::infer("TEST")
    }

    #[test]
    fn test_bullish_scenario() {
        let scorer = SignalScorer::new(EngineConfig::default());
        let scored = scorer
            .score("TEST", &bullish_snapshot(), &instrument(), wednesday_noon())
            .unwrap();

        assert_eq!(scored.bias, Bias::Bullish);
        assert_eq!(scored.long_count, 6);
        // strength, position and volume also vote short
        assert_eq!(scored.short_count, 3);
        assert_eq!(scored.strength, 6);
        assert_eq!(scored.confidence, 100.0);
        assert_eq!(scored.conditions.len(), 6);
        assert!(scored.reason.is_none());

        assert!((scored.expected_move.stop_loss - 3.0).abs() < 1e-12);
        assert!((scored.expected_move.take_profit - 6.0).abs() < 1e-12);
        assert_eq!(scored.expected_move.risk_reward, 2.0);

        let trend = scored.condition(ConditionKind::Trend).unwrap();
        assert!(trend.long_condition);
        let rsi = scored.condition(ConditionKind::Rsi).unwrap();
        assert!(rsi.long_condition);
    }

    #[test]
    fn test_bearish_mirror() {
        let snapshot = IndicatorSnapshot {
            current_price: Some(100.0),
            previous_price: Some(102.0),
            ema_fast: Some(103.0),
            ema_slow: Some(108.0),
            sma_trend: Some(106.0),
            rsi: Some(70.0),
            bb_upper: Some(110.0),
            bb_middle: Some(99.0),
            bb_lower: Some(90.0),
            atr: Some(2.0),
            current_volume: Some(2000.0),
            volume_sma: Some(1000.0),
            ..Default::default()
        };
        let scorer = SignalScorer::new(EngineConfig::default());
        let scored = scorer
            .score("TEST", &snapshot, &instrument(), wednesday_noon())
            .unwrap();

        assert_eq!(scored.bias, Bias::Bearish);
        assert_eq!(scored.strength, scored.short_count);
        assert!(scored.strength >= 4);
    }

    #[test]
    fn test_neutral_below_minimum() {
        // Only the flat defaults: position votes both ways, nothing else
        let scorer = SignalScorer::new(EngineConfig::default());
        let scored = scorer
            .score("TEST", &IndicatorSnapshot::new(1.0), &instrument(), wednesday_noon())
            .unwrap();

        assert_eq!(scored.bias, Bias::Neutral);
        assert_eq!(scored.long_count, 1);
        assert_eq!(scored.short_count, 1);
        assert_eq!(scored.strength, 1);
        assert_eq!(scored.expected_move.stop_loss, 0.0);
    }

    #[test]
    fn test_outside_session() {
        let scorer = SignalScorer::new(EngineConfig::default());
        let saturday = Utc.with_ymd_and_hms(2024, 1, 13, 12, 0, 0).unwrap();
        let scored = scorer
            .score("TEST", &bullish_snapshot(), &instrument(), saturday)
            .unwrap();

        assert_eq!(scored.bias, Bias::Neutral);
        assert_eq!(scored.strength, 0);
        assert!(scored.conditions.is_empty());
        assert_eq!(scored.reason.as_deref(), Some(OUTSIDE_SESSION_REASON));
        assert_eq!(scored.price, 110.0);
    }

    #[test]
    fn test_always_open_instrument_scores_on_weekend() {
        let scorer = SignalScorer::new(EngineConfig::default());
        let saturday = Utc.with_ymd_and_hms(2024, 1, 13, 3, 0, 0).unwrap();
        let btc = InstrumentSpec::infer("BTCUSD");
        let scored = scorer
            .score("BTCUSD", &bullish_snapshot(), &btc, saturday)
            .unwrap();
        assert_eq!(scored.bias, Bias::Bullish);
    }

    #[test]
    fn test_missing_price_is_insufficient_data() {
        let scorer = SignalScorer::new(EngineConfig::default());
        let err = scorer
            .score("TEST", &IndicatorSnapshot::default(), &instrument(), wednesday_noon())
            .unwrap_err();
        assert!(matches!(err, ScoreError::InsufficientData { .. }));
    }

    #[test]
    fn test_higher_minimum_changes_bias() {
        let config = EngineConfig {
            min_signal_strength: 6,
            ..Default::default()
        };
        let mut snapshot = bullish_snapshot();
        snapshot.previous_price = Some(111.0);

        let scored = SignalScorer::new(config)
            .score("TEST", &snapshot, &instrument(), wednesday_noon())
            .unwrap();
        assert_eq!(scored.long_count, 5);
        assert_eq!(scored.bias, Bias::Neutral);
        assert_eq!(scored.strength, 5);
    }
}
