use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the caller learns about a submitted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub order_id: u64,
    /// Exchange status verbatim, e.g. `NEW` or `FILLED`
    pub status: String,
    pub average_price: Option<Decimal>,
}

impl fmt::Display for OrderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order {} {}", self.order_id, self.status)?;
        if let Some(avg) = self.average_price {
            write!(f, " @ {}", avg)?;
        }
        Ok(())
    }
}
