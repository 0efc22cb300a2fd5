mod order;
mod order_request;
mod order_status;
mod order_type;
mod side;
mod symbol;

pub use order::{Order, OrderId};
pub use order_request::OrderRequest;
pub use order_status::{OrderStatus, ParseStatusError};
pub use order_type::OrderType;
pub use side::Side;
pub use symbol::Symbol;
