//! Instrument metadata used for pip scaling and session rules.

use serde::{Deserialize, Serialize};

/// Broad asset class of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Forex,
    Metal,
    Crypto,
    Index,
    #[default]
    Other,
}

const CRYPTO_TICKERS: &[&str] = &[
    "BTC", "ETH", "SOL", "XRP", "LTC", "ADA", "DOGE", "BNB", "DOT", "AVAX", "LINK", "MATIC",
];

const INDEX_TICKERS: &[&str] = &["US30", "US500", "SPX", "NAS100", "NDX", "GER40", "UK100", "JP225"];

/// Per-symbol metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSpec {
    /// Symbol as used by the host
    pub symbol: String,
    /// Asset class
    #[serde(default)]
    pub asset_class: AssetClass,
    /// Smallest quoted increment used to scale trend strength
    pub pip_size: f64,
    /// Trades around the clock (bypasses the session window)
    #[serde(default)]
    pub always_open: bool,
}

impl InstrumentSpec {
    /// Create a spec with explicit values.
    pub fn new(symbol: impl Into<String>, asset_class: AssetClass, pip_size: f64) -> Self {
        Self {
            symbol: symbol.into(),
            asset_class,
            pip_size,
            always_open: asset_class == AssetClass::Crypto,
        }
    }

    /// Infer the spec from the symbol name.
    ///
    /// Separators (`/`, `-`, `_`) are ignored. JPY crosses quote in 0.01,
    /// other six-letter currency pairs in 0.0001. Crypto trades 24/7.
    pub fn infer(symbol: &str) -> Self {
        let normalized: String = symbol
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();

        if CRYPTO_TICKERS.iter().any(|t| normalized.starts_with(t)) {
            return Self::new(symbol, AssetClass::Crypto, 1.0);
        }
        if normalized.starts_with("XAU") || normalized.starts_with("XAG") {
            return Self::new(symbol, AssetClass::Metal, 0.01);
        }
        if INDEX_TICKERS.iter().any(|t| normalized.starts_with(t)) {
            return Self::new(symbol, AssetClass::Index, 1.0);
        }
        if normalized.len() == 6 && normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            let pip = if normalized.contains("JPY") { 0.01 } else { 0.0001 };
            return Self::new(symbol, AssetClass::Forex, pip);
        }

        Self::new(symbol, AssetClass::Other, 0.01)
    }

    /// Mark the instrument as trading around the clock.
    pub fn with_always_open(mut self, always_open: bool) -> Self {
        self.always_open = always_open;
        self
    }

    /// Convert a price distance into pips.
    pub fn to_pips(&self, distance: f64) -> f64 {
        if self.pip_size > 0.0 {
            distance / self.pip_size
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_forex() {
        let spec = InstrumentSpec::infer("EURUSD");
        assert_eq!(spec.asset_class, AssetClass::Forex);
        assert_eq!(spec.pip_size, 0.0001);
        assert!(!spec.always_open);

        let spec = InstrumentSpec::infer("usd/jpy");
        assert_eq!(spec.asset_class, AssetClass::Forex);
        assert_eq!(spec.pip_size, 0.01);
    }

    #[test]
    fn test_infer_crypto_is_always_open() {
        let spec = InstrumentSpec::infer("BTC-USD");
        assert_eq!(spec.asset_class, AssetClass::Crypto);
        assert!(spec.always_open);
        assert_eq!(spec.pip_size, 1.0);
    }

    #[test]
    fn test_infer_metal_and_other() {
        assert_eq!(InstrumentSpec::infer("XAUUSD").asset_class, AssetClass::Metal);
        assert_eq!(InstrumentSpec::infer("NAS100").asset_class, AssetClass::Index);

        let spec = InstrumentSpec::infer("AAPL");
        assert_eq!(spec.asset_class, AssetClass::Other);
        assert_eq!(spec.pip_size, 0.01);
    }

    #[test]
    fn test_to_pips() {
        let spec = InstrumentSpec::infer("EURUSD");
        assert!((spec.to_pips(0.0015) - 15.0).abs() < 1e-9);

        let broken = InstrumentSpec::new("X", AssetClass::Other, 0.0);
        assert_eq!(broken.to_pips(1.0), 0.0);
    }
}
