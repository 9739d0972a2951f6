//! Trend strength scaled to the instrument's pip size.

use signal_core::InstrumentSpec;

/// Gap between the fast and slow EMA, in pips.
///
/// Always non-negative. A zero or negative pip size yields 0.
pub fn trend_strength(ema_fast: f64, ema_slow: f64, instrument: &InstrumentSpec) -> f64 {
    instrument.to_pips((ema_fast - ema_slow).abs())
}
