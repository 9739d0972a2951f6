//! Plain-text rendering of signals for terminals.

use signal_core::{ScoredSignal, TradingSignal};

fn flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "-"
    }
}

/// Render a scored signal with its condition table.
pub fn render_scored(scored: &ScoredSignal) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} @ {}  {}  strength {}/{}  confidence {:.1}%\n",
        scored.symbol,
        scored.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        scored.bias,
        scored.strength,
        scored.max_strength,
        scored.confidence
    ));

    if let Some(reason) = &scored.reason {
        out.push_str(&format!("  {}\n", reason));
        return out;
    }

    out.push_str(&format!(
        "  votes: long {} / short {}\n",
        scored.long_count, scored.short_count
    ));
    out.push_str(&format!("  {:<20} {:>5} {:>5}\n", "condition", "long", "short"));
    for c in &scored.conditions {
        out.push_str(&format!(
            "  {:<20} {:>5} {:>5}\n",
            c.name,
            flag(c.long_condition),
            flag(c.short_condition)
        ));
    }
    out.push_str(&format!(
        "  price {}  atr {}  stop dist {:.5}  target dist {:.5}  R:R {:.2}\n",
        scored.price,
        scored.atr,
        scored.expected_move.stop_loss,
        scored.expected_move.take_profit,
        scored.expected_move.risk_reward
    ));

    out
}

/// Render an accepted trading signal on one line.
pub fn render_trading_signal(signal: &TradingSignal) -> String {
    format!(
        "{} {} {} entry {} stop {:.5} target {:.5} risk {:.5} (strength {}/{})",
        signal.id,
        signal.action,
        signal.symbol(),
        signal.entry,
        signal.stop_loss,
        signal.take_profit,
        signal.risk,
        signal.strength(),
        signal.scored.max_strength
    )
}
