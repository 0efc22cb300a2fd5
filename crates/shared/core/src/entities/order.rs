use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{OrderStatus, OrderType, Side, Symbol};
use crate::values::TimestampMs;

/// Venue-assigned order identifier
///
/// Opaque to us. An empty id can be constructed so that callers which
/// validate input (the order cache) can reject it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        OrderId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        OrderId::new(s)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        OrderId(s)
    }
}

/// Normalized order record, as produced by a venue adapter's order parser
///
/// Numeric fields are optional because venues frequently omit them
/// (e.g. an open-orders listing that only reports `remaining`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Unified `BASE/QUOTE` symbol, if the adapter could map the market
    pub symbol: Option<Symbol>,
    pub status: OrderStatus,
    pub side: Option<Side>,
    pub order_type: Option<OrderType>,
    /// Total order quantity
    pub amount: Option<Decimal>,
    /// Cumulative filled quantity
    pub filled: Option<Decimal>,
    /// `max(amount - filled, 0)` when both are known
    pub remaining: Option<Decimal>,
    /// Limit price, `None` for market orders
    pub price: Option<Decimal>,
    /// Quote currency spent or received
    pub cost: Option<Decimal>,
    /// Creation time in epoch milliseconds
    pub timestamp: Option<TimestampMs>,
}

impl Order {
    /// Create an open, unfilled order
    pub fn new(
        id: impl Into<OrderId>,
        symbol: Option<Symbol>,
        amount: Decimal,
        price: Option<Decimal>,
    ) -> Self {
        Self {
            id: id.into(),
            symbol,
            status: OrderStatus::Open,
            side: None,
            order_type: None,
            amount: Some(amount),
            filled: Some(Decimal::ZERO),
            remaining: Some(amount),
            price,
            cost: None,
            timestamp: None,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the filled quantity and recompute `remaining`
    pub fn with_filled(mut self, filled: Decimal) -> Self {
        self.filled = Some(filled);
        self.recompute_remaining();
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_timestamp(mut self, timestamp: TimestampMs) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Enforce `remaining = max(amount - filled, 0)` when both are known
    pub fn recompute_remaining(&mut self) {
        if let (Some(amount), Some(filled)) = (self.amount, self.filled) {
            self.remaining = Some((amount - filled).max(Decimal::ZERO));
        }
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// True only if the order's symbol is known and equal to `symbol`
    pub fn matches_symbol(&self, symbol: &Symbol) -> bool {
        self.symbol.as_ref() == Some(symbol)
    }

    /// Creation time as a UTC datetime
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// Mark an open order closed after it vanished from the venue's open set
    ///
    /// The venue gave no reason, so the order is assumed fully filled:
    /// `filled = amount`, `remaining = 0`. `cost` is derived from the price
    /// only if the venue never reported it. Terminal orders are left as they
    /// are. Returns whether the order changed.
    pub fn infer_closed(&mut self) -> bool {
        if !self.status.can_transition_to(OrderStatus::Closed) {
            return false;
        }

        self.status = OrderStatus::Closed;
        self.filled = self.amount;
        self.remaining = Some(Decimal::ZERO);
        if self.cost.is_none() {
            if let (Some(filled), Some(price)) = (self.filled, self.price) {
                self.cost = Some(filled * price);
            }
        }
        true
    }

    /// Mark an open order canceled after a successful cancel request
    ///
    /// Fill quantities are kept as last seen. Returns whether the order changed.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_transition_to(OrderStatus::Canceled) {
            return false;
        }
        self.status = OrderStatus::Canceled;
        true
    }
}
