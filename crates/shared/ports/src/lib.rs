//! Venue Ports
//!
//! Port definitions (traits) for the venue order cache.
//! These define the boundaries between the cache and the venue-specific
//! infrastructure (HTTP transport, endpoint routing, request signing and
//! payload parsing), which all live behind these traits.

mod clock;
mod error;
mod venue;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{VenueError, VenueResult};
pub use venue::{OpenOrdersSource, OrderAck, OrderPlacement};
