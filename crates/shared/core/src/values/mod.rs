use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Order quantity in base currency units
pub type Amount = Decimal;

/// Epoch milliseconds, the unit venues report order times in
pub type TimestampMs = i64;
