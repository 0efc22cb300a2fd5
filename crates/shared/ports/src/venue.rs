use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use venue_core::{Order, OrderId, OrderRequest, OrderStatus, Symbol};

use crate::error::VenueResult;

/// Port for a venue's "list open orders" endpoint
///
/// Implementations perform the HTTP call, routing and signing, and parse the
/// venue payload into normalized [`Order`]s. The returned list must be the
/// venue's complete open set for `scope` (one symbol), or for every symbol
/// when `scope` is `None`.
#[async_trait]
pub trait OpenOrdersSource: Send + Sync {
    async fn fetch_open_orders(&self, scope: Option<&Symbol>) -> VenueResult<Vec<Order>>;
}

/// Port for order submission and cancellation
#[async_trait]
pub trait OrderPlacement: Send + Sync {
    /// Submit an order, returning what the venue told us about it
    async fn submit_order(&self, request: &OrderRequest) -> VenueResult<OrderAck>;

    /// Cancel an order. Some venues need the symbol to route the request.
    async fn cancel_order(&self, id: &OrderId, symbol: Option<&Symbol>) -> VenueResult<()>;
}

/// Venue response to an order submission
///
/// Most venues only return the new id. Some also report an immediate
/// (partial) fill, e.g. a limit order that crossed the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAck {
    pub id: OrderId,
    pub status: OrderStatus,
    pub filled: Option<Decimal>,
    pub remaining: Option<Decimal>,
}

impl OrderAck {
    /// Order accepted and resting, nothing filled yet
    pub fn accepted(id: impl Into<OrderId>) -> Self {
        Self {
            id: id.into(),
            status: OrderStatus::Open,
            filled: None,
            remaining: None,
        }
    }

    /// Order accepted with an immediate fill of `filled`
    pub fn with_fill(mut self, filled: Decimal, remaining: Decimal) -> Self {
        self.filled = Some(filled);
        self.remaining = Some(remaining);
        if remaining.is_zero() {
            self.status = OrderStatus::Closed;
        }
        self
    }
}
