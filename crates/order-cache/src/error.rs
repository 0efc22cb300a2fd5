//! Order cache errors

use thiserror::Error;
use venue_core::OrderId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Order not found in cache: {0}")]
    OrderNotFound(OrderId),
}

pub type Result<T> = std::result::Result<T, Error>;
