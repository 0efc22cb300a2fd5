//! Venue configuration
//!
//! Loaded from a JSON file of the form:
//!
//! ```json
//! {
//!   "venues": [
//!     { "id": "exmo", "name": "EXMO", "symbols": ["BTC/USD"] },
//!     { "id": "wex", "name": "WEX", "fetch_orders_requires_symbol": true }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use venue_core::Symbol;

use crate::error::{GatewayError, Result};

/// Root configuration for the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfigFile {
    pub venues: Vec<VenueConfig>,
}

/// Configuration for a single venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueConfig {
    /// Unique identifier for the venue (e.g., "exmo", "coinex")
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether this venue is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Symbols this session trades; empty means any
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    /// The venue's open-orders endpoint only works per symbol
    #[serde(default)]
    pub fetch_orders_requires_symbol: bool,
}

impl VenueConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        VenueConfig {
            id: id.into().to_lowercase(),
            name: name.into(),
            enabled: true,
            symbols: Vec::new(),
            fetch_orders_requires_symbol: false,
        }
    }

    pub fn with_symbols(mut self, symbols: Vec<Symbol>) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn requiring_symbol(mut self, required: bool) -> Self {
        self.fetch_orders_requires_symbol = required;
        self
    }

    /// Whether the session is configured to trade `symbol`
    pub fn trades(&self, symbol: &Symbol) -> bool {
        self.symbols.is_empty() || self.symbols.contains(symbol)
    }
}

impl GatewayConfigFile {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GatewayConfigFile = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn enabled_venues(&self) -> Vec<&VenueConfig> {
        self.venues.iter().filter(|v| v.enabled).collect()
    }

    pub fn venue(&self, id: &str) -> Option<&VenueConfig> {
        self.venues.iter().find(|v| v.id == id)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for venue in &self.venues {
            if venue.id.is_empty() {
                return Err(GatewayError::Config("venue id must not be empty".to_string()));
            }
            if !seen.insert(venue.id.as_str()) {
                return Err(GatewayError::Config(format!(
                    "duplicate venue id: {}",
                    venue.id
                )));
            }
        }
        Ok(())
    }
}

// Default value functions for serde
fn default_true() -> bool {
    true
}
