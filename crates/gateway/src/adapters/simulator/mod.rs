//! Simulated venue adapter
//!
//! An in-memory venue that, like the venues the order cache exists for,
//! can only report orders that are still open.

mod venue;

pub use venue::SimulatedVenue;
