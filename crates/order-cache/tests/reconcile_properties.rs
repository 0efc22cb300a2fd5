//! Order cache reconciliation properties
//!
//! Exercises the snapshot-diffing contract end to end:
//! 1. Fresh snapshots overwrite cached orders field-for-field
//! 2. Orders missing from an in-scope snapshot are inferred closed
//! 3. Out-of-scope orders are never touched
//! 4. Repeating a reconcile changes nothing

use rust_decimal_macros::dec;
use venue_core::{Order, OrderId, OrderStatus, Side, Symbol};
use venue_order_cache::{Error, OrderCache, OrderFilter, SharedOrderCache};

fn open(id: &str, symbol: &str) -> Order {
    Order::new(id, Some(Symbol::from(symbol)), dec!(10), Some(dec!(5)))
}

fn find<'a>(orders: &'a [Order], id: &str) -> &'a Order {
    orders
        .iter()
        .find(|o| o.id.as_str() == id)
        .expect("order should be cached")
}

#[test]
fn test_empty_cache_bootstrap() {
    let _ = env_logger::try_init();
    let mut cache = OrderCache::new();

    let fresh = vec![open("1", "BTC/USD"), open("2", "ETH/USD")];
    let orders = cache.reconcile(fresh.clone(), None).unwrap();

    assert_eq!(orders, fresh);
    assert!(orders.iter().all(|o| o.status == OrderStatus::Open));
}

#[test]
fn test_inferred_closure() {
    let mut cache = OrderCache::new();
    cache
        .reconcile(vec![open("1", "BTC/USD").with_filled(dec!(3))], None)
        .unwrap();

    let orders = cache.reconcile(vec![], Some(&Symbol::from("BTC/USD"))).unwrap();

    let order = find(&orders, "1");
    assert_eq!(order.status, OrderStatus::Closed);
    assert_eq!(order.filled, Some(dec!(10)));
    assert_eq!(order.remaining, Some(dec!(0)));
    // cost was never reported, so it is derived from price
    assert_eq!(order.cost, Some(dec!(50)));
}

#[test]
fn test_vanished_order_is_never_inferred_canceled() {
    let mut cache = OrderCache::new();
    cache.reconcile(vec![open("1", "BTC/USD")], None).unwrap();

    let orders = cache.reconcile(vec![], None).unwrap();
    assert_eq!(find(&orders, "1").status, OrderStatus::Closed);
}

#[test]
fn test_scope_isolation() {
    let mut cache = OrderCache::new();
    cache
        .reconcile(vec![open("1", "A/B"), open("2", "C/D")], None)
        .unwrap();

    let orders = cache.reconcile(vec![], Some(&Symbol::from("A/B"))).unwrap();

    assert_eq!(find(&orders, "1").status, OrderStatus::Closed);
    let untouched = find(&orders, "2");
    assert_eq!(untouched.status, OrderStatus::Open);
    assert_eq!(untouched.filled, Some(dec!(0)));
    assert_eq!(untouched.remaining, Some(dec!(10)));
}

#[test]
fn test_unscoped_reconcile_closes_every_absent_order() {
    let mut cache = OrderCache::new();
    cache
        .reconcile(
            vec![open("1", "A/B"), open("2", "C/D"), open("3", "E/F")],
            None,
        )
        .unwrap();

    let orders = cache.reconcile(vec![open("2", "C/D")], None).unwrap();

    assert_eq!(find(&orders, "1").status, OrderStatus::Closed);
    assert_eq!(find(&orders, "2").status, OrderStatus::Open);
    assert_eq!(find(&orders, "3").status, OrderStatus::Closed);
}

#[test]
fn test_snapshot_wins_field_for_field() {
    let mut cache = OrderCache::new();
    cache
        .reconcile(vec![open("1", "BTC/USD").with_cost(dec!(1))], None)
        .unwrap();

    let fresh = Order::new("1", Some(Symbol::from("BTC/USD")), dec!(12), Some(dec!(6)))
        .with_filled(dec!(2))
        .with_side(Side::Sell)
        .with_timestamp(1_700_000_000_000);
    let orders = cache.reconcile(vec![fresh.clone()], None).unwrap();

    // the fresh copy has no cost; the stale cached cost must not survive
    assert_eq!(find(&orders, "1"), &fresh);
}

#[test]
fn test_idempotent_reconcile() {
    let mut cache = OrderCache::new();
    cache
        .reconcile(
            vec![open("1", "BTC/USD"), open("2", "BTC/USD"), open("3", "ETH/USD")],
            None,
        )
        .unwrap();

    let scope = Symbol::from("BTC/USD");
    let fresh = vec![open("2", "BTC/USD").with_filled(dec!(1))];
    let first = cache.reconcile(fresh.clone(), Some(&scope)).unwrap();
    let second = cache.reconcile(fresh, Some(&scope)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_terminal_orders_left_untouched_by_inference() {
    let mut cache = OrderCache::new();
    let canceled = open("1", "BTC/USD")
        .with_filled(dec!(4))
        .with_status(OrderStatus::Canceled);
    cache.record(canceled.clone()).unwrap();

    let orders = cache.reconcile(vec![], None).unwrap();
    assert_eq!(find(&orders, "1"), &canceled);
}

#[test]
fn test_fresh_open_snapshot_overwrites_closed_entry() {
    let mut cache = OrderCache::new();
    cache.reconcile(vec![open("1", "BTC/USD")], None).unwrap();
    cache.reconcile(vec![], None).unwrap();
    assert_eq!(
        cache.get(&OrderId::new("1")).unwrap().status,
        OrderStatus::Closed
    );

    // The venue lists it as open again: the snapshot is authoritative
    let orders = cache.reconcile(vec![open("1", "BTC/USD")], None).unwrap();
    assert_eq!(find(&orders, "1"), &open("1", "BTC/USD"));
}

#[test]
fn test_invalid_argument_leaves_cache_unmodified() {
    let mut cache = OrderCache::new();
    cache.reconcile(vec![open("1", "BTC/USD")], None).unwrap();
    let before = cache.orders();

    let err = cache
        .reconcile(vec![open("", "BTC/USD")], None)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(cache.orders(), before);
}

#[test]
fn test_history_views_over_reconciled_orders() {
    let mut cache = OrderCache::new();
    cache
        .reconcile(
            vec![
                open("1", "BTC/USD").with_timestamp(1_000),
                open("2", "BTC/USD").with_timestamp(2_000),
                open("3", "ETH/USD").with_timestamp(3_000),
            ],
            None,
        )
        .unwrap();
    let all = cache
        .reconcile(
            vec![open("2", "BTC/USD").with_timestamp(2_000)],
            Some(&Symbol::from("BTC/USD")),
        )
        .unwrap();

    let closed = OrderFilter::new()
        .with_status(OrderStatus::Closed)
        .apply(all.clone());
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].id.as_str(), "1");

    let open_since = OrderFilter::new()
        .with_status(OrderStatus::Open)
        .with_since(2_500)
        .apply(all);
    assert_eq!(open_since.len(), 1);
    assert_eq!(open_since[0].id.as_str(), "3");
}

/// Per-symbol pollers running on separate tasks must not corrupt each other
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_scoped_reconciles() {
    let _ = env_logger::try_init();
    let cache = SharedOrderCache::new();
    let symbols = ["BTC/USD", "ETH/USD", "LTC/USD", "XRP/USD"];

    let seed: Vec<Order> = symbols
        .iter()
        .flat_map(|s| (0..10).map(move |i| open(&format!("{}-{}", s, i), s)))
        .collect();
    cache.reconcile(seed, None).unwrap();

    // Each task keeps the even-numbered orders of its own symbol open
    let mut handles = Vec::new();
    for symbol in symbols {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            let scope = Symbol::from(symbol);
            for _ in 0..50 {
                let still_open: Vec<Order> = (0..10)
                    .filter(|i| i % 2 == 0)
                    .map(|i| open(&format!("{}-{}", symbol, i), symbol))
                    .collect();
                cache.reconcile(still_open, Some(&scope)).unwrap();
                tokio::task::yield_now().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let orders = cache.orders();
    assert_eq!(orders.len(), 40);
    for order in &orders {
        let index: u32 = order
            .id
            .as_str()
            .rsplit('-')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap();
        let expected = if index % 2 == 0 {
            OrderStatus::Open
        } else {
            OrderStatus::Closed
        };
        assert_eq!(order.status, expected, "order {}", order.id);
    }
}
