use std::fmt;

use super::{OrderKind, OrderType, Side};
use crate::validation::{
    RawValue, ValidationResult, require_price, validate_quantity, validate_side,
    validate_stop_price, validate_symbol,
};
use crate::values::{Price, Quantity, Symbol};

/// Kind-specific part of an order request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSpec {
    /// Execute immediately at the best available price
    Market,
    /// Rest on the book at `price` or better until filled or canceled
    Limit { price: Price },
    /// Becomes a limit order at `price` once the market crosses `stop_price`
    StopLimit { stop_price: Price, price: Price },
}

impl OrderSpec {
    pub fn kind(&self) -> OrderKind {
        match self {
            OrderSpec::Market => OrderKind::Market,
            OrderSpec::Limit { .. } => OrderKind::Limit,
            OrderSpec::StopLimit { .. } => OrderKind::StopLimit,
        }
    }
}

/// A validated order intent, ready for submission
///
/// Only the per-kind builders create one, and each builder runs the
/// validators in a fixed order (symbol, side, quantity, then prices),
/// returning the first failure unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    symbol: Symbol,
    side: Side,
    quantity: Quantity,
    spec: OrderSpec,
}

impl OrderRequest {
    pub fn market(
        symbol: impl Into<RawValue>,
        side: impl Into<RawValue>,
        quantity: impl Into<RawValue>,
    ) -> ValidationResult<Self> {
        let (symbol, side, quantity) = Self::validate_common(symbol, side, quantity)?;
        Ok(Self {
            symbol,
            side,
            quantity,
            spec: OrderSpec::Market,
        })
    }

    pub fn limit(
        symbol: impl Into<RawValue>,
        side: impl Into<RawValue>,
        quantity: impl Into<RawValue>,
        price: impl Into<RawValue>,
    ) -> ValidationResult<Self> {
        let (symbol, side, quantity) = Self::validate_common(symbol, side, quantity)?;
        let price = require_price(price.into(), "Price", OrderType::Limit)?;
        Ok(Self {
            symbol,
            side,
            quantity,
            spec: OrderSpec::Limit { price },
        })
    }

    pub fn stop_limit(
        symbol: impl Into<RawValue>,
        side: impl Into<RawValue>,
        quantity: impl Into<RawValue>,
        stop_price: impl Into<RawValue>,
        price: impl Into<RawValue>,
    ) -> ValidationResult<Self> {
        let (symbol, side, quantity) = Self::validate_common(symbol, side, quantity)?;
        let stop_price = validate_stop_price(stop_price)?;
        let price = require_price(price.into(), "Price", OrderType::StopLimit)?;
        Ok(Self {
            symbol,
            side,
            quantity,
            spec: OrderSpec::StopLimit { stop_price, price },
        })
    }

    fn validate_common(
        symbol: impl Into<RawValue>,
        side: impl Into<RawValue>,
        quantity: impl Into<RawValue>,
    ) -> ValidationResult<(Symbol, Side, Quantity)> {
        let symbol = validate_symbol(symbol)?;
        let side = validate_side(side)?;
        let quantity = validate_quantity(quantity)?;
        Ok((symbol, side, quantity))
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn spec(&self) -> &OrderSpec {
        &self.spec
    }

    pub fn kind(&self) -> OrderKind {
        self.spec.kind()
    }

    /// Limit price, `None` for market orders
    pub fn price(&self) -> Option<Price> {
        match self.spec {
            OrderSpec::Market => None,
            OrderSpec::Limit { price } | OrderSpec::StopLimit { price, .. } => Some(price),
        }
    }

    /// Trigger price, only set for stop-limit orders
    pub fn stop_price(&self) -> Option<Price> {
        match self.spec {
            OrderSpec::StopLimit { stop_price, .. } => Some(stop_price),
            _ => None,
        }
    }
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Symbol={}, Side={}, Quantity={}",
            self.symbol, self.side, self.quantity
        )?;
        match self.spec {
            OrderSpec::Market => Ok(()),
            OrderSpec::Limit { price } => write!(f, ", Price={}", price),
            OrderSpec::StopLimit { stop_price, price } => {
                write!(f, ", StopPrice={}, Price={}", stop_price, price)
            }
        }
    }
}
