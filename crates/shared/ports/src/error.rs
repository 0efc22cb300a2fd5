use thiserror::Error;

/// Errors raised by venue adapters
///
/// These originate in the fetch and placement collaborators. The order
/// cache never produces, catches or reinterprets them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VenueError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid venue response: {0}")]
    InvalidResponse(String),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order rejected: {0}")]
    Rejected(String),

    #[error("Symbol not listed on venue: {0}")]
    UnknownSymbol(String),
}

pub type VenueResult<T> = std::result::Result<T, VenueError>;
