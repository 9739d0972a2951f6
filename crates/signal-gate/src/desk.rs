//! One engine per symbol, sharing configuration and clock.

use signal_core::traits::{Clock, Validate};
use signal_core::{ConfigError, IndicatorSnapshot, TradingSignal};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::engine::{SignalEngine, TickReport};
use crate::instruments::InstrumentBook;
use crate::EngineConfig;

/// Routes ticks to a per-symbol [`SignalEngine`], creating engines on first use.
///
/// Cooldowns, daily caps and history are tracked per symbol.
pub struct SignalDesk {
    config: EngineConfig,
    instruments: InstrumentBook,
    clock: Arc<dyn Clock>,
    engines: HashMap<String, SignalEngine>,
}

impl SignalDesk {
    pub fn new(
        config: EngineConfig,
        instruments: InstrumentBook,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            instruments,
            clock,
            engines: HashMap::new(),
        })
    }

    /// Engine for `symbol`, created if missing.
    pub fn engine_mut(&mut self, symbol: &str) -> Result<&mut SignalEngine, ConfigError> {
        match self.engines.entry(symbol.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let engine = SignalEngine::new(
                    self.config.clone(),
                    self.instruments.clone(),
                    Arc::clone(&self.clock),
                )?;
                Ok(entry.insert(engine))
            }
        }
    }

    pub fn engine(&self, symbol: &str) -> Option<&SignalEngine> {
        self.engines.get(symbol)
    }

    /// Score and gate one snapshot on the symbol's own engine.
    pub fn process_tick(
        &mut self,
        symbol: &str,
        snapshot: &IndicatorSnapshot,
    ) -> Result<TickReport, ConfigError> {
        Ok(self.engine_mut(symbol)?.process_tick(symbol, snapshot))
    }

    /// Symbols seen so far, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.engines.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Up to `limit` accepted signals across all symbols, newest first.
    pub fn signal_history(&self, limit: usize) -> Vec<&TradingSignal> {
        let mut all: Vec<&TradingSignal> = self
            .engines
            .values()
            .flat_map(|e| e.signal_history(limit))
            .collect();
        all.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        all.truncate(limit);
        all
    }

    pub fn reset(&mut self) {
        self.engines.values_mut().for_each(SignalEngine::reset);
    }
}
