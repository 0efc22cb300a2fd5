//! Venue Order Cache
//!
//! Many venues only expose a "list open orders" endpoint: once an order
//! leaves the open set there is no way to ask the venue what happened to it.
//! The order cache keeps every order a session has seen and reconciles it
//! against each fresh open-orders snapshot:
//!
//! - **Snapshot wins**: every fetched order overwrites the cached copy.
//! - **Inference**: a cached open order that is missing from a snapshot
//!   covering its symbol is marked `closed` (filled = amount, remaining = 0).
//!
//! ## Architecture
//!
//! ```text
//! Venue adapter (fetch + parse)
//!         │ Vec<Order> (open set for a scope)
//!    ┌────▼──────────┐
//!    │  OrderCache   │  id → last-known Order, insertion ordered
//!    │  reconcile()  │  upsert fresh, infer closed for vanished
//!    └────┬──────────┘
//!         │ Vec<Order> (whole cache)
//!    ┌────▼──────────┐
//!    │  OrderFilter  │  symbol / status / since / limit
//!    └───────────────┘
//! ```
//!
//! A vanished order is always inferred `closed`, never `canceled`: the
//! venue gives no signal to tell a fill from an external cancel.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use venue_order_cache::{OrderCache, OrderFilter};
//!
//! let mut cache = OrderCache::new();
//! let all = cache.reconcile(open_orders, Some(&symbol))?;
//! let closed = OrderFilter::new().with_status(OrderStatus::Closed).apply(all);
//! ```

pub mod cache;
pub mod error;
pub mod filter;
pub mod shared;

pub use cache::OrderCache;
pub use error::{Error, Result};
pub use filter::OrderFilter;
pub use shared::SharedOrderCache;
