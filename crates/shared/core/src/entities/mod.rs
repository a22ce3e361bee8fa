mod order_request;
mod order_result;
mod order_type;
mod side;
mod time_in_force;

pub use order_request::{OrderRequest, OrderSpec};
pub use order_result::OrderResult;
pub use order_type::{OrderKind, OrderType};
pub use side::Side;
pub use time_in_force::TimeInForce;
