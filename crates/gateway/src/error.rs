//! Error types for the gateway crate

use thiserror::Error;
use venue_order_cache::Error as CacheError;
use venue_ports::VenueError;

/// Gateway-level errors (session operations)
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Venue error: {0}")]
    Venue(#[from] VenueError),

    #[error("Order cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Venue {0} requires a symbol to fetch orders")]
    SymbolRequired(String),

    #[error("Invalid order request: {0}")]
    InvalidRequest(String),

    #[error("Unknown venue: {0}")]
    UnknownVenue(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
