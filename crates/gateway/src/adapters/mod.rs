//! Venue adapters
//!
//! Adapters implement the venue ports: they fetch and parse a venue's open
//! orders and submit/cancel orders. Real venues sit behind HTTP transport
//! and request signing; the simulator keeps everything in memory.

pub mod simulator;

pub use simulator::SimulatedVenue;
