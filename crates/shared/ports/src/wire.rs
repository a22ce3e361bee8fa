//! Wire contract between the order submitter and the exchange transport
//!
//! Field names follow the futures REST API (`stopPrice`, `timeInForce`,
//! `avgPrice`, ...). Optional parameters are left out entirely when absent.

use hermes_core::{OrderType, Price, Quantity, Side, Symbol, TimeInForce};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

/// Order placement parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderParams {
    pub symbol: Symbol,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub quantity: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

impl OrderParams {
    pub fn new(symbol: Symbol, side: Side, order_type: OrderType, quantity: Quantity) -> Self {
        Self {
            symbol,
            side,
            order_type,
            quantity,
            price: None,
            stop_price: None,
            time_in_force: None,
        }
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stop_price(mut self, stop_price: Price) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Key/value pairs in wire order, ready for form encoding
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("symbol", self.symbol.to_string()),
            ("side", self.side.to_string()),
            ("type", self.order_type.to_string()),
            ("quantity", self.quantity.to_string()),
        ];
        if let Some(price) = self.price {
            pairs.push(("price", price.to_string()));
        }
        if let Some(stop_price) = self.stop_price {
            pairs.push(("stopPrice", stop_price.to_string()));
        }
        if let Some(tif) = self.time_in_force {
            pairs.push(("timeInForce", tif.to_string()));
        }
        pairs
    }
}

impl fmt::Display for OrderParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

/// Order acknowledgement as returned by the exchange
///
/// Only `orderId` and `status` are relied upon; everything else is kept for
/// logging and display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrderResponse {
    pub order_id: u64,
    pub status: String,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub avg_price: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub client_order_id: Option<String>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub orig_qty: Option<Decimal>,
    #[serde(default, deserialize_with = "optional_decimal")]
    pub executed_qty: Option<Decimal>,
    #[serde(default, rename = "type")]
    pub order_type: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub update_time: Option<i64>,
}

impl RawOrderResponse {
    /// Minimal acknowledgement, mostly useful for transport doubles
    pub fn new(order_id: u64, status: impl Into<String>) -> Self {
        Self {
            order_id,
            status: status.into(),
            avg_price: None,
            price: None,
            symbol: None,
            client_order_id: None,
            orig_qty: None,
            executed_qty: None,
            order_type: None,
            side: None,
            update_time: None,
        }
    }
}

/// Decimal sent as a string (or bare number); empty strings read as absent
fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(Decimal),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            Decimal::from_str(s).map(Some).map_err(de::Error::custom)
        }
    }
}
