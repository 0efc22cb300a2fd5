use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;
use venue_core::{Order, OrderId, OrderRequest, OrderType, Symbol};
use venue_ports::{
    Clock, OpenOrdersSource, OrderAck, OrderPlacement, SystemClock, VenueError, VenueResult,
};

/// In-memory venue with an open-orders-only API
///
/// Limit orders rest until filled or canceled; market orders fill in full
/// on submission. Once an order leaves the book the venue forgets it.
/// The `fill`, `complete` and `cancel_externally` hooks change the book
/// behind the session's back, as fills and manual cancels on a real
/// venue would.
pub struct SimulatedVenue {
    symbols: Vec<Symbol>,
    book: DashMap<OrderId, Order>,
    offline: AtomicBool,
    clock: Arc<dyn Clock>,
}

impl SimulatedVenue {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols,
            book: DashMap::new(),
            offline: AtomicBool::new(false),
            clock: Arc::new(SystemClock::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Make every request fail with a network error until switched back
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn open_order_count(&self) -> usize {
        self.book.len()
    }

    pub fn is_open(&self, id: &OrderId) -> bool {
        self.book.contains_key(id)
    }

    /// Execute `quantity` against a resting order
    ///
    /// An order filled in full leaves the book. Returns the order's filled
    /// quantity afterwards.
    pub fn fill(&self, id: &OrderId, quantity: Decimal) -> VenueResult<Decimal> {
        let (filled, complete) = {
            let mut order = self
                .book
                .get_mut(id)
                .ok_or_else(|| VenueError::OrderNotFound(id.to_string()))?;
            let amount = order.amount.unwrap_or(Decimal::ZERO);
            let filled = (order.filled.unwrap_or(Decimal::ZERO) + quantity).min(amount);
            order.filled = Some(filled);
            order.recompute_remaining();
            (filled, filled >= amount)
        };

        // the entry guard must be dropped before removing
        if complete {
            debug!("Simulated order {} fully filled", id);
            self.book.remove(id);
        }
        Ok(filled)
    }

    /// Fill a resting order completely; it disappears from the open set
    pub fn complete(&self, id: &OrderId) -> bool {
        self.book.remove(id).is_some()
    }

    /// Cancel a resting order outside the session (e.g. from the venue's web UI)
    pub fn cancel_externally(&self, id: &OrderId) -> bool {
        self.book.remove(id).is_some()
    }

    fn ensure_online(&self) -> VenueResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(VenueError::Network("simulated venue is offline".to_string()));
        }
        Ok(())
    }

    fn ensure_listed(&self, symbol: &Symbol) -> VenueResult<()> {
        if !self.symbols.contains(symbol) {
            return Err(VenueError::UnknownSymbol(symbol.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl OpenOrdersSource for SimulatedVenue {
    async fn fetch_open_orders(&self, scope: Option<&Symbol>) -> VenueResult<Vec<Order>> {
        self.ensure_online()?;
        if let Some(symbol) = scope {
            self.ensure_listed(symbol)?;
        }

        let mut orders: Vec<Order> = self
            .book
            .iter()
            .filter(|entry| scope.is_none_or(|s| entry.value().matches_symbol(s)))
            .map(|entry| entry.value().clone())
            .collect();
        // the book has no natural order; list oldest first like most venues
        orders.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
        Ok(orders)
    }
}

#[async_trait]
impl OrderPlacement for SimulatedVenue {
    async fn submit_order(&self, request: &OrderRequest) -> VenueResult<OrderAck> {
        self.ensure_online()?;
        self.ensure_listed(&request.symbol)?;
        if !request.validate() {
            return Err(VenueError::Rejected(format!(
                "invalid {} order",
                request.order_type.as_str()
            )));
        }

        let id = OrderId::new(Uuid::new_v4().to_string());
        match request.order_type {
            OrderType::Market => {
                debug!("Simulated market order {} filled on arrival", id);
                Ok(OrderAck::accepted(id).with_fill(request.amount, Decimal::ZERO))
            }
            OrderType::Limit => {
                let order = Order::new(
                    id.clone(),
                    Some(request.symbol.clone()),
                    request.amount,
                    request.price,
                )
                .with_side(request.side)
                .with_order_type(request.order_type)
                .with_timestamp(self.clock.now_millis());
                self.book.insert(id.clone(), order);
                debug!("Simulated limit order {} resting", id);
                Ok(OrderAck::accepted(id))
            }
        }
    }

    async fn cancel_order(&self, id: &OrderId, _symbol: Option<&Symbol>) -> VenueResult<()> {
        self.ensure_online()?;
        self.book
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| VenueError::OrderNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use venue_core::Side;

    fn venue() -> SimulatedVenue {
        SimulatedVenue::new(vec![Symbol::from("BTC/USD"), Symbol::from("ETH/USD")])
    }

    #[tokio::test]
    async fn test_limit_orders_rest_until_filled() {
        let venue = venue();
        let ack = venue
            .submit_order(&OrderRequest::limit("BTC/USD", Side::Buy, dec!(2), dec!(10)))
            .await
            .unwrap();
        assert!(venue.is_open(&ack.id));

        assert_eq!(venue.fill(&ack.id, dec!(0.5)).unwrap(), dec!(0.5));
        assert!(venue.is_open(&ack.id));

        venue.fill(&ack.id, dec!(5)).unwrap();
        assert!(!venue.is_open(&ack.id));
    }

    #[tokio::test]
    async fn test_market_orders_never_rest() {
        let venue = venue();
        let ack = venue
            .submit_order(&OrderRequest::market("ETH/USD", Side::Sell, dec!(1)))
            .await
            .unwrap();
        assert_eq!(ack.filled, Some(dec!(1)));
        assert_eq!(venue.open_order_count(), 0);
    }

    #[tokio::test]
    async fn test_scoped_listing() {
        let venue = venue();
        venue
            .submit_order(&OrderRequest::limit("BTC/USD", Side::Buy, dec!(1), dec!(10)))
            .await
            .unwrap();
        venue
            .submit_order(&OrderRequest::limit("ETH/USD", Side::Buy, dec!(1), dec!(10)))
            .await
            .unwrap();

        let btc = venue
            .fetch_open_orders(Some(&Symbol::from("BTC/USD")))
            .await
            .unwrap();
        assert_eq!(btc.len(), 1);
        assert_eq!(venue.fetch_open_orders(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unlisted_symbol_and_offline() {
        let venue = venue();
        let err = venue
            .submit_order(&OrderRequest::market("DOGE/USD", Side::Buy, dec!(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, VenueError::UnknownSymbol(_)));

        venue.set_offline(true);
        let err = venue.fetch_open_orders(None).await.unwrap_err();
        assert!(matches!(err, VenueError::Network(_)));
    }

    #[tokio::test]
    async fn test_cancel_unknown_order() {
        let venue = venue();
        let err = venue
            .cancel_order(&OrderId::new("nope"), None)
            .await
            .unwrap_err();
        assert_eq!(err, VenueError::OrderNotFound("nope".to_string()));
    }
}
