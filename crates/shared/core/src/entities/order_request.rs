use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderType, Side, Symbol};

/// Normalized order submission handed to a venue adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: Symbol,
    pub side: Side,
    pub order_type: OrderType,
    /// Quantity in base currency
    pub amount: Decimal,
    /// Limit price (required for limit orders)
    pub price: Option<Decimal>,
}

impl OrderRequest {
    /// Create a limit order request
    pub fn limit(symbol: impl Into<Symbol>, side: Side, amount: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            amount,
            price: Some(price),
        }
    }

    /// Create a market order request
    pub fn market(symbol: impl Into<Symbol>, side: Side, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            amount,
            price: None,
        }
    }

    /// Validate the request based on order type requirements
    pub fn validate(&self) -> bool {
        if self.amount <= Decimal::ZERO {
            return false;
        }
        match self.order_type {
            OrderType::Market => true,
            OrderType::Limit => self.price.is_some_and(|p| p > Decimal::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limit_request() {
        let req = OrderRequest::limit("BTC/USD", Side::Buy, dec!(0.5), dec!(30000));
        assert_eq!(req.order_type, OrderType::Limit);
        assert_eq!(req.price, Some(dec!(30000)));
        assert!(req.validate());
    }

    #[test]
    fn test_market_request_has_no_price() {
        let req = OrderRequest::market("ETH/USD", Side::Sell, dec!(2));
        assert!(req.price.is_none());
        assert!(req.validate());
    }

    #[test]
    fn test_invalid_requests() {
        assert!(!OrderRequest::market("ETH/USD", Side::Sell, dec!(0)).validate());

        let mut req = OrderRequest::limit("BTC/USD", Side::Buy, dec!(1), dec!(100));
        req.price = None;
        assert!(!req.validate());
    }
}
