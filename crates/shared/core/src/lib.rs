//! Venue Core Domain
//!
//! Pure domain types shared by every venue adapter: the normalized order
//! record, its status state machine, and trading pair symbols.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Order, OrderId, OrderRequest, OrderStatus, OrderType, ParseStatusError, Side, Symbol,
};
pub use values::{Amount, Price, TimestampMs};
