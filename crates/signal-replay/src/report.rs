//! Replay report generation.

use serde::{Deserialize, Serialize};
use signal_conditions::EngineConfig;

use crate::statistics::{ReplayStats, SignalRecord};

/// Complete replay report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    pub symbol: String,
    /// Bars supplied
    pub bars: usize,
    /// Bars consumed before the first tick
    pub warmup: usize,
    /// Configuration used
    pub config: EngineConfig,
    pub stats: ReplayStats,
    /// Accepted signals in emission order
    pub records: Vec<SignalRecord>,
}

impl ReplayReport {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let s = &self.stats;
        let mut out = String::new();

        out.push_str("═══════════════════════════════════════════════════════════\n");
        out.push_str(&format!("  SIGNAL REPLAY: {}\n", self.symbol));
        out.push_str("═══════════════════════════════════════════════════════════\n\n");

        out.push_str("SCORING\n");
        out.push_str("───────────────────────────────────────────────────────────\n");
        out.push_str(&format!("  Bars:                {}\n", self.bars));
        out.push_str(&format!("  Warm-up Bars:        {}\n", self.warmup));
        out.push_str(&format!("  Ticks Scored:        {}\n", s.ticks - s.unscored));
        out.push_str(&format!("  Bullish:             {}\n", s.bullish));
        out.push_str(&format!("  Bearish:             {}\n", s.bearish));
        out.push_str(&format!(
            "  Neutral:             {} ({} outside session)\n",
            s.neutral, s.outside_session
        ));
        out.push('\n');

        out.push_str("GATE\n");
        out.push_str("───────────────────────────────────────────────────────────\n");
        out.push_str(&format!("  Signals Accepted:    {}\n", s.signals));
        for (code, count) in &s.rejections {
            out.push_str(&format!("  Rejected ({:<14}) {}\n", format!("{}):", code), count));
        }
        out.push('\n');

        out.push_str("OUTCOMES\n");
        out.push_str("───────────────────────────────────────────────────────────\n");
        out.push_str(&format!("  Take Profit:         {}\n", s.take_profits));
        out.push_str(&format!("  Stop Loss:           {}\n", s.stop_losses));
        out.push_str(&format!("  Still Open:          {}\n", s.open));
        out.push_str(&format!("  Win Rate:            {:.2}%\n", s.win_rate_pct));
        out.push_str(&format!("  Total R:             {:.2}\n", s.total_r));
        out.push_str(&format!("  Avg Strength:        {:.2}\n", s.avg_strength));
        out.push('\n');

        out.push_str("═══════════════════════════════════════════════════════════\n");

        out
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
