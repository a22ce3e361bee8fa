use serde::{Deserialize, Serialize};
use std::fmt;

/// Order types recognized by the futures exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Execute at specified price or better
    Limit,
    /// Execute at current market price
    Market,
    /// Limit order triggered when price reaches stop price
    Stop,
    /// Market order triggered when price reaches stop price
    StopMarket,
    /// User-facing name for a triggered limit order (sent as `Stop`)
    StopLimit,
    /// Limit order triggered when price reaches the profit target
    TakeProfit,
    /// Market order triggered when price reaches the profit target
    TakeProfitMarket,
    /// Market order whose trigger follows the price by a callback rate
    TrailingStopMarket,
}

impl OrderType {
    pub const ALL: [OrderType; 8] = [
        OrderType::Limit,
        OrderType::Market,
        OrderType::Stop,
        OrderType::StopMarket,
        OrderType::StopLimit,
        OrderType::TakeProfit,
        OrderType::TakeProfitMarket,
        OrderType::TrailingStopMarket,
    ];

    /// Exchange wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "LIMIT",
            OrderType::Market => "MARKET",
            OrderType::Stop => "STOP",
            OrderType::StopMarket => "STOP_MARKET",
            OrderType::StopLimit => "STOP_LIMIT",
            OrderType::TakeProfit => "TAKE_PROFIT",
            OrderType::TakeProfitMarket => "TAKE_PROFIT_MARKET",
            OrderType::TrailingStopMarket => "TRAILING_STOP_MARKET",
        }
    }

    /// Order types that cannot be placed without a limit price
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::StopLimit)
    }

    pub(crate) fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Comma separated list of every wire name, for error messages
    pub(crate) fn names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order kinds offered to the user by the order entry surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderKind {
    Market,
    Limit,
    StopLimit,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        OrderType::from(*self).as_str()
    }
}

impl From<OrderKind> for OrderType {
    fn from(kind: OrderKind) -> Self {
        match kind {
            OrderKind::Market => OrderType::Market,
            OrderKind::Limit => OrderType::Limit,
            OrderKind::StopLimit => OrderType::StopLimit,
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        for t in OrderType::ALL {
            assert_eq!(OrderType::from_wire(t.as_str()), Some(t));
        }
        assert_eq!(OrderType::from_wire("ICEBERG"), None);
    }

    #[test]
    fn test_serde_names_match_wire_names() {
        let json = serde_json::to_string(&OrderType::TrailingStopMarket).unwrap();
        assert_eq!(json, "\"TRAILING_STOP_MARKET\"");
    }

    #[test]
    fn test_requires_price() {
        assert!(OrderType::Limit.requires_price());
        assert!(OrderType::StopLimit.requires_price());
        assert!(!OrderType::Market.requires_price());
        assert!(!OrderType::StopMarket.requires_price());
    }

    #[test]
    fn test_kind_maps_to_user_facing_type() {
        assert_eq!(OrderType::from(OrderKind::StopLimit), OrderType::StopLimit);
        assert_eq!(OrderKind::StopLimit.to_string(), "STOP_LIMIT");
    }
}
