//! RSI momentum condition with MACD confirmation inside the neutral band.

use signal_core::traits::ConditionEvaluator;
use signal_core::{ConditionKind, ConditionResult, InstrumentSpec, ResolvedSnapshot};

use crate::config::EngineConfig;

/// Long when RSI is oversold, or neutral with MACD above its signal line.
/// Short when RSI is overbought, or neutral with MACD below its signal line.
#[derive(Debug, Clone)]
pub struct RsiMomentumCondition {
    oversold: f64,
    overbought: f64,
    neutral_low: f64,
    neutral_high: f64,
}

impl RsiMomentumCondition {
    pub fn new(oversold: f64, overbought: f64, neutral_low: f64, neutral_high: f64) -> Self {
        Self {
            oversold,
            overbought,
            neutral_low,
            neutral_high,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.rsi_oversold,
            config.rsi_overbought,
            config.rsi_neutral_low,
            config.rsi_neutral_high,
        )
    }
}

impl ConditionEvaluator for RsiMomentumCondition {
    fn kind(&self) -> ConditionKind {
        ConditionKind::Rsi
    }

    fn name(&self) -> &str {
        "RSI Momentum"
    }

    fn evaluate(&self, s: &ResolvedSnapshot, _instrument: &InstrumentSpec) -> ConditionResult {
        let neutral = s.rsi >= self.neutral_low && s.rsi <= self.neutral_high;
        let macd_bullish = s.macd_main > s.macd_signal;
        let macd_bearish = s.macd_main < s.macd_signal;

        let long = s.rsi < self.oversold || (neutral && macd_bullish);
        let short = s.rsi > self.overbought || (neutral && macd_bearish);

        ConditionResult::new(self.kind(), self.name(), long, short)
            .with_detail("rsi", s.rsi)
            .with_detail("macdMain", s.macd_main)
            .with_detail("macdSignal", s.macd_signal)
            .with_detail("neutralZone", neutral)
    }

    fn description(&self) -> &str {
        "long: RSI oversold or neutral with MACD > signal; short: overbought or neutral with MACD < signal"
    }
}
