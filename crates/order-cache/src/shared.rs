//! Thread-safe handle to an order cache
//!
//! Sessions polling different symbols from separate tasks share one cache.
//! Every call holds the lock for the whole operation, so two reconciles can
//! never interleave their upsert and inference steps. Nothing here awaits
//! while the lock is held.

use parking_lot::Mutex;
use std::sync::Arc;
use venue_core::{Order, OrderId, OrderStatus, Symbol};

use crate::cache::OrderCache;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct SharedOrderCache {
    inner: Arc<Mutex<OrderCache>>,
}

impl SharedOrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`OrderCache::reconcile`]
    pub fn reconcile(
        &self,
        fresh_open_orders: Vec<Order>,
        scope: Option<&Symbol>,
    ) -> Result<Vec<Order>> {
        self.inner.lock().reconcile(fresh_open_orders, scope)
    }

    pub fn record(&self, order: Order) -> Result<()> {
        self.inner.lock().record(order)
    }

    pub fn mark_canceled(&self, id: &OrderId) -> Option<OrderStatus> {
        self.inner.lock().mark_canceled(id)
    }

    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.inner.lock().get(id).cloned()
    }

    /// Like [`get`](Self::get), but a missing order is an error
    pub fn require(&self, id: &OrderId) -> Result<Order> {
        self.get(id).ok_or_else(|| Error::OrderNotFound(id.clone()))
    }

    pub fn orders(&self) -> Vec<Order> {
        self.inner.lock().orders()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl From<OrderCache> for SharedOrderCache {
    fn from(cache: OrderCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}
