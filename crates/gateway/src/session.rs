//! Venue session - order history for venues that only list open orders
//!
//! Every history query refreshes the cache from the venue's open-orders
//! endpoint first, then answers from the cache. Orders we place or cancel
//! are written to the cache as soon as the venue acknowledges them.
//!
//! A venue round trip and the cache write that follows it run under one
//! session lock. Otherwise a snapshot taken before `create_order` would be
//! reconciled after the new order was recorded, and the order would be
//! inferred closed while still resting on the venue.

use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;
use venue_core::{Order, OrderId, OrderRequest, OrderStatus, OrderType, Symbol};
use venue_order_cache::{OrderFilter, SharedOrderCache};
use venue_ports::{Clock, OpenOrdersSource, OrderAck, OrderPlacement, SystemClock};

use crate::config::VenueConfig;
use crate::error::{GatewayError, Result};

/// One authenticated connection to one venue, with its own order cache
pub struct VenueSession<V> {
    config: VenueConfig,
    venue: Arc<V>,
    cache: SharedOrderCache,
    clock: Arc<dyn Clock>,
    /// Held from each venue request until its result is in the cache
    round_trip: Arc<Mutex<()>>,
}

impl<V> VenueSession<V>
where
    V: OpenOrdersSource + OrderPlacement,
{
    /// Create a session with an empty cache and the system clock
    pub fn new(config: VenueConfig, venue: Arc<V>) -> Self {
        Self {
            config,
            venue,
            cache: SharedOrderCache::new(),
            clock: Arc::new(SystemClock::new()),
            round_trip: Arc::new(Mutex::new(())),
        }
    }

    /// Use the cache of another session to the same account
    ///
    /// The session lock is shared too, so round trips of either session
    /// cannot interleave with the other's cache writes.
    pub fn sharing_cache_with<W>(mut self, other: &VenueSession<W>) -> Self {
        self.cache = other.cache.clone();
        self.round_trip = other.round_trip.clone();
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &VenueConfig {
        &self.config
    }

    pub fn venue(&self) -> &Arc<V> {
        &self.venue
    }

    pub fn cache(&self) -> &SharedOrderCache {
        &self.cache
    }

    /// Refresh from the venue's open orders and return the filtered cache
    ///
    /// The fetch is scoped to `filter.symbol` when set. Venues configured
    /// with `fetch_orders_requires_symbol` reject unscoped queries.
    pub async fn fetch_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        let scope = filter.scope();
        if scope.is_none() && self.config.fetch_orders_requires_symbol {
            return Err(GatewayError::SymbolRequired(self.config.id.clone()));
        }

        debug!(
            "{}: fetching open orders for {}",
            self.config.id,
            scope.map_or("all symbols", |s| s.as_str())
        );
        let _round_trip = self.round_trip.lock().await;
        let open = self
            .venue
            .fetch_open_orders(scope)
            .await
            .inspect_err(|e| warn!("{}: open orders fetch failed: {}", self.config.id, e))?;

        let all = self.cache.reconcile(open, scope)?;
        Ok(filter.apply(all))
    }

    /// Orders still open after refreshing
    pub async fn fetch_open_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        let filter = filter.clone().with_status(OrderStatus::Open);
        self.fetch_orders(&filter).await
    }

    /// Orders known or inferred to be closed after refreshing
    pub async fn fetch_closed_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        let filter = filter.clone().with_status(OrderStatus::Closed);
        self.fetch_orders(&filter).await
    }

    /// Refresh, then look up a single order in the cache
    ///
    /// Fails with `OrderNotFound` if the order is neither open on the venue
    /// nor remembered from earlier in this session.
    pub async fn fetch_order(&self, id: &OrderId, symbol: Option<&Symbol>) -> Result<Order> {
        let filter = match symbol {
            Some(symbol) => OrderFilter::new().with_symbol(symbol.clone()),
            None => OrderFilter::new(),
        };
        self.fetch_orders(&filter).await?;
        Ok(self.cache.require(id)?)
    }

    /// Submit an order and cache it as the venue acknowledged it
    pub async fn create_order(&self, request: OrderRequest) -> Result<Order> {
        if !request.validate() {
            return Err(GatewayError::InvalidRequest(format!(
                "{} {} {} {}",
                request.order_type.as_str(),
                request.side.as_str(),
                request.amount,
                request.symbol
            )));
        }
        if !self.config.trades(&request.symbol) {
            return Err(GatewayError::InvalidRequest(format!(
                "{} is not configured for {}",
                request.symbol, self.config.id
            )));
        }

        let _round_trip = self.round_trip.lock().await;
        let ack = self.venue.submit_order(&request).await?;
        let order = order_from_ack(&request, ack, self.clock.now_millis());
        self.cache.record(order.clone()).inspect_err(|e| {
            warn!(
                "{}: venue accepted {} {} {} but the order was not cached: {}",
                self.config.id,
                request.side.as_str(),
                request.amount,
                request.symbol,
                e
            )
        })?;

        info!(
            "{}: order {} placed ({} {} {} @ {:?}), status {}",
            self.config.id,
            order.id,
            request.side.as_str(),
            request.amount,
            request.symbol,
            request.price,
            order.status
        );
        Ok(order)
    }

    /// Cancel an order on the venue, then mark it canceled in the cache
    ///
    /// Returns the cached status afterwards, or `None` if the order was not
    /// cached (placed outside this session and never fetched).
    pub async fn cancel_order(
        &self,
        id: &OrderId,
        symbol: Option<&Symbol>,
    ) -> Result<Option<OrderStatus>> {
        let _round_trip = self.round_trip.lock().await;
        self.venue.cancel_order(id, symbol).await?;
        Ok(self.cache.mark_canceled(id))
    }
}

/// Build the cached order for a submission the venue accepted
fn order_from_ack(request: &OrderRequest, ack: OrderAck, now_ms: i64) -> Order {
    let mut order = Order::new(
        ack.id,
        Some(request.symbol.clone()),
        request.amount,
        request.price,
    )
    .with_side(request.side)
    .with_order_type(request.order_type)
    .with_status(ack.status)
    .with_timestamp(now_ms);

    // cost stays unknown until the venue reports a fill
    if let Some(filled) = ack.filled {
        order = order.with_filled(filled);
        if let (OrderType::Limit, Some(price)) = (request.order_type, order.price) {
            order.cost = Some(price * filled);
        }
    }
    // venue-reported remaining wins over our own arithmetic
    if ack.remaining.is_some() {
        order.remaining = ack.remaining;
    }
    order
}
