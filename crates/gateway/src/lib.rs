//! Venue Gateway
//!
//! Gateway layer between callers asking for order history and venues that
//! can only list open orders. Provides:
//! - `VenueSession`: fetch/create/cancel orders with a per-session order cache
//! - `VenueManager`: one session per enabled venue in a config file
//! - Venue configuration loading
//! - A simulated in-memory venue adapter
//!
//! ## Architecture
//!
//! ```text
//! Caller (fetch_orders / fetch_closed_orders / fetch_order)
//!         │
//!    ┌────▼──────────┐     fetch_open_orders(scope)    ┌──────────────┐
//!    │ VenueSession  │ ──────────────────────────────► │ Venue adapter│
//!    │               │ ◄────────────────────────────── │ (HTTP, sign, │
//!    └────┬──────────┘        Vec<Order> (open)        │  parse)      │
//!         │ reconcile                                  └──────────────┘
//!    ┌────▼──────────┐
//!    │  Order cache  │
//!    └───────────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod manager;
pub mod session;

// Re-export commonly used types
pub use adapters::SimulatedVenue;
pub use config::{GatewayConfigFile, VenueConfig};
pub use error::{GatewayError, Result};
pub use manager::VenueManager;
pub use session::VenueSession;
