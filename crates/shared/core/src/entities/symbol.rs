use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified trading pair identifier in `BASE/QUOTE` form (e.g. `BTC/USD`)
///
/// Venue-specific market ids (`btc_usd`, `XBTUSD`, ...) are mapped to this
/// form by the adapter before anything reaches the order cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Symbol(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base currency, or `None` if the symbol is not in `BASE/QUOTE` form
    pub fn base(&self) -> Option<&str> {
        self.0.split_once('/').map(|(base, _)| base)
    }

    /// Quote currency, or `None` if the symbol is not in `BASE/QUOTE` form
    pub fn quote(&self) -> Option<&str> {
        self.0.split_once('/').map(|(_, quote)| quote)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol(s)
    }
}
