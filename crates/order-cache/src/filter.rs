//! Order-history views over the cache
//!
//! Reconciliation returns every cached order; callers narrow that down to
//! what the public order-history API asked for.

use venue_core::{Order, OrderStatus, Symbol, TimestampMs};

/// Symbol / status / time-window / limit filter for cached orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub symbol: Option<Symbol>,
    pub status: Option<OrderStatus>,
    /// Inclusive lower bound on creation time, epoch milliseconds
    pub since: Option<TimestampMs>,
    /// Keep at most this many orders (the earliest cached ones)
    pub limit: Option<usize>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_since(mut self, since: TimestampMs) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Symbol a venue fetch should be scoped to
    pub fn scope(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// Whether a single order passes the symbol, status and `since` checks
    ///
    /// Orders without a timestamp never pass a `since` bound.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(symbol) = &self.symbol {
            if !order.matches_symbol(symbol) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(since) = self.since {
            if !order.timestamp.is_some_and(|ts| ts >= since) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, orders: Vec<Order>) -> Vec<Order> {
        let matching = orders.into_iter().filter(|o| self.matches(o));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}
