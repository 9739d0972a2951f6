//! Trading session window, evaluated in UTC.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use signal_core::traits::Validate;
use signal_core::{ConfigError, InstrumentSpec};

/// Hours during which signals may be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingSession {
    /// First open hour (inclusive)
    pub start_hour: u32,
    /// Closing hour (exclusive)
    pub end_hour: u32,
    /// Closing hour on Fridays (exclusive)
    pub friday_close_hour: u32,
    /// Hours around scheduled news to sit out
    pub news_avoidance_hours: Vec<u32>,
    pub trade_weekends: bool,
}

impl Default for TradingSession {
    fn default() -> Self {
        Self {
            start_hour: 7,
            end_hour: 20,
            friday_close_hour: 17,
            news_avoidance_hours: Vec::new(),
            trade_weekends: false,
        }
    }
}

impl TradingSession {
    /// Whether `instrument` may be traded at `now`.
    pub fn is_open(&self, now: DateTime<Utc>, instrument: &InstrumentSpec) -> bool {
        if instrument.always_open {
            return true;
        }

        let weekday = now.weekday();
        if matches!(weekday, Weekday::Sat | Weekday::Sun) && !self.trade_weekends {
            return false;
        }

        let hour = now.hour();
        if hour < self.start_hour || hour >= self.end_hour {
            return false;
        }
        if weekday == Weekday::Fri && hour >= self.friday_close_hour {
            return false;
        }

        !self.news_avoidance_hours.contains(&hour)
    }
}

impl Validate for TradingSession {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.start_hour > 23 {
            return Err(ConfigError::invalid("session.start_hour", "must be 0-23"));
        }
        if self.end_hour > 24 || self.end_hour <= self.start_hour {
            return Err(ConfigError::invalid(
                "session.end_hour",
                format!("must be after start_hour ({}) and at most 24", self.start_hour),
            ));
        }
        if self.friday_close_hour > 24 {
            return Err(ConfigError::invalid(
                "session.friday_close_hour",
                "must be at most 24",
            ));
        }
        if let Some(hour) = self.news_avoidance_hours.iter().find(|h| **h > 23) {
            return Err(ConfigError::invalid(
                "session.news_avoidance_hours",
                format!("hour {} is not 0-23", hour),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        // January 2024: the 8th is a Monday
        Utc.with_ymd_and_hms(2024, 1, day, hour, 30, 0).unwrap()
    }

    fn eurusd() -> InstrumentSpec {
        InstrumentSpec::infer("EURUSD")
    }

    #[test]
    fn test_weekday_hours() {
        let session = TradingSession::default();
        assert!(!session.is_open(at(10, 6), &eurusd()));
        assert!(session.is_open(at(10, 7), &eurusd()));
        assert!(session.is_open(at(10, 19), &eurusd()));
        assert!(!session.is_open(at(10, 20), &eurusd()));
    }

    #[test]
    fn test_friday_close() {
        let session = TradingSession::default();
        assert!(session.is_open(at(12, 16), &eurusd()));
        assert!(!session.is_open(at(12, 17), &eurusd()));
    }

    #[test]
    fn test_weekend() {
        let mut session = TradingSession::default();
        assert!(!session.is_open(at(13, 12), &eurusd()));
        assert!(!session.is_open(at(14, 12), &eurusd()));

        session.trade_weekends = true;
        assert!(session.is_open(at(13, 12), &eurusd()));
    }

    #[test]
    fn test_news_hours() {
        let session = TradingSession {
            news_avoidance_hours: vec![13],
            ..Default::default()
        };
        assert!(session.is_open(at(10, 12), &eurusd()));
        assert!(!session.is_open(at(10, 13), &eurusd()));
    }

    #[test]
    fn test_always_open_instrument() {
        let session = TradingSession::default();
        let btc = InstrumentSpec::infer("BTCUSD");
        assert!(session.is_open(at(14, 3), &btc));
    }

    #[test]
    fn test_validation() {
        assert!(TradingSession::default().validate().is_ok());

        let inverted = TradingSession {
            start_hour: 20,
            end_hour: 7,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let bad_news = TradingSession {
            news_avoidance_hours: vec![24],
            ..Default::default()
        };
        assert!(bad_news.validate().is_err());
    }
}
