//! Order cache and open-order reconciliation
//!
//! The cache is the only record of an order's fate once it leaves the
//! venue's open set. Entries are never evicted.

use log::{debug, info};
use std::collections::{HashMap, HashSet};
use venue_core::{Order, OrderId, OrderStatus, Symbol};

use crate::error::{Error, Result};

/// Process-local mapping of order id → last-known order
///
/// Entries keep the order in which ids were first seen, so every list the
/// cache returns is deterministic.
#[derive(Debug, Clone, Default)]
pub struct OrderCache {
    orders: Vec<Order>,
    index: HashMap<OrderId, usize>,
}

impl OrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a fresh open-orders snapshot and infer closure for vanished orders
    ///
    /// `fresh_open_orders` must be the venue's complete open set for `scope`
    /// (a single symbol), or for all symbols when `scope` is `None`.
    ///
    /// 1. Every fresh order overwrites its cached entry (or is inserted).
    /// 2. Every cached order missing from the snapshot is left alone if it is
    ///    outside `scope`; otherwise, if still open, it is inferred closed.
    /// 3. The whole cache is returned.
    ///
    /// Fails with [`Error::InvalidArgument`] before touching the cache if any
    /// fresh order has an empty id. An empty snapshot is valid and means
    /// nothing in scope is open any more.
    pub fn reconcile(
        &mut self,
        fresh_open_orders: Vec<Order>,
        scope: Option<&Symbol>,
    ) -> Result<Vec<Order>> {
        validate_ids(&fresh_open_orders)?;

        let fetched = fresh_open_orders.len();
        let mut fresh_ids = HashSet::with_capacity(fetched);
        for order in fresh_open_orders {
            fresh_ids.insert(order.id.clone());
            self.upsert(order);
        }

        let mut inferred = 0usize;
        for order in self.orders.iter_mut() {
            if fresh_ids.contains(&order.id) {
                continue;
            }
            // Fetched for another symbol, this snapshot says nothing about it
            if let Some(symbol) = scope {
                if !order.matches_symbol(symbol) {
                    continue;
                }
            }
            if order.infer_closed() {
                inferred += 1;
                info!(
                    "Order {} ({}) left the open set, inferred closed",
                    order.id,
                    order.symbol.as_ref().map_or("?", |s| s.as_str())
                );
            }
        }

        debug!(
            "Reconciled {} open orders (scope: {}), {} inferred closed, {} cached",
            fetched,
            scope.map_or("all", |s| s.as_str()),
            inferred,
            self.orders.len()
        );

        Ok(self.orders.clone())
    }

    /// Cache an order we just placed, overwriting any entry with the same id
    pub fn record(&mut self, order: Order) -> Result<()> {
        validate_id(&order.id)?;
        debug!("Recording order {} as {}", order.id, order.status);
        self.upsert(order);
        Ok(())
    }

    /// Mark a cached order canceled after the venue accepted our cancel
    ///
    /// Returns the order's status afterwards, or `None` if it was never
    /// cached. Orders already closed or canceled keep their status.
    pub fn mark_canceled(&mut self, id: &OrderId) -> Option<OrderStatus> {
        let slot = *self.index.get(id)?;
        let order = &mut self.orders[slot];
        if order.cancel() {
            info!("Order {} canceled", id);
        } else {
            debug!("Cancel for order {} ignored, already {}", id, order.status);
        }
        Some(order.status)
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.index.get(id).map(|&slot| &self.orders[slot])
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.index.contains_key(id)
    }

    /// Copy of every cached order, in first-seen order
    pub fn orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn upsert(&mut self, order: Order) {
        match self.index.get(&order.id) {
            Some(&slot) => self.orders[slot] = order,
            None => {
                self.index.insert(order.id.clone(), self.orders.len());
                self.orders.push(order);
            }
        }
    }
}

fn validate_id(id: &OrderId) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidArgument("order id must not be empty".to_string()));
    }
    Ok(())
}

fn validate_ids(orders: &[Order]) -> Result<()> {
    match orders.iter().position(|o| o.id.is_empty()) {
        Some(pos) => Err(Error::InvalidArgument(format!(
            "open order at position {} has an empty id",
            pos
        ))),
        None => Ok(()),
    }
}
