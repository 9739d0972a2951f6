//! Resolves instrument metadata for a symbol.

use signal_core::InstrumentSpec;
use std::collections::HashMap;

/// Configured instrument overrides, falling back to inference.
#[derive(Debug, Clone, Default)]
pub struct InstrumentBook {
    overrides: HashMap<String, InstrumentSpec>,
}

impl InstrumentBook {
    pub fn new(specs: impl IntoIterator<Item = InstrumentSpec>) -> Self {
        let overrides = specs
            .into_iter()
            .map(|spec| (normalize(&spec.symbol), spec))
            .collect();
        Self { overrides }
    }

    /// Spec for `symbol`: the configured override if any, otherwise inferred.
    pub fn resolve(&self, symbol: &str) -> InstrumentSpec {
        self.overrides
            .get(&normalize(symbol))
            .cloned()
            .unwrap_or_else(|| InstrumentSpec::infer(symbol))
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

fn normalize(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}
