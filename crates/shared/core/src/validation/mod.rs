//! Order input validators
//!
//! Every validator takes a loosely-typed [`RawValue`] and returns the
//! normalized, strongly-typed value or a [`ValidationError`] naming the
//! offending field and value. Validators are pure: no I/O, no shared state,
//! and applying one to its own output returns the same value.

mod raw;
mod trigger;

pub use raw::RawValue;

use raw::Coercion;
pub use trigger::{TriggerWarning, would_trigger_immediately};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::entities::{OrderType, Side};
use crate::values::{Price, Quantity, Symbol};

/// Locally detectable malformed order input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be text, got {found}")]
    NotText {
        field: &'static str,
        found: &'static str,
    },

    #[error("Symbol must contain only alphanumeric characters: '{0}'")]
    InvalidSymbol(String),

    #[error("Side must be 'BUY' or 'SELL', got '{0}'")]
    InvalidSide(String),

    #[error("Invalid order type: '{0}'. Must be one of {names}", names = OrderType::names())]
    InvalidOrderType(String),

    #[error("{field} must be a numeric value, got {found}")]
    NotNumeric { field: &'static str, found: String },

    #[error("{field} must be a positive number greater than 0, got {value}")]
    NotPositive { field: &'static str, value: String },

    /// A positive number too large or too small for a decimal amount
    #[error("{field} is outside the supported decimal range, got {found}")]
    OutOfRange { field: &'static str, found: String },

    #[error("{field} must be provided for order type '{order_type}'")]
    Missing {
        field: &'static str,
        order_type: OrderType,
    },
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Uppercased, trimmed text or a `NotText` error
fn normalized_text(raw: &RawValue, field: &'static str) -> ValidationResult<String> {
    raw.as_text()
        .map(|s| s.trim().to_uppercase())
        .ok_or(ValidationError::NotText {
            field,
            found: raw.type_name(),
        })
}

/// Numeric coercion followed by the strictly-positive range check
fn positive_decimal(raw: &RawValue, field: &'static str) -> ValidationResult<Decimal> {
    let value = match raw.to_decimal() {
        Ok(value) => value,
        Err(Coercion::NotNumeric) => {
            return Err(ValidationError::NotNumeric {
                field,
                found: raw.describe(),
            });
        }
        Err(Coercion::OutOfRange(reading)) if reading > 0.0 => {
            return Err(ValidationError::OutOfRange {
                field,
                found: raw.describe(),
            });
        }
        Err(Coercion::OutOfRange(reading)) => {
            return Err(ValidationError::NotPositive {
                field,
                value: reading.to_string(),
            });
        }
    };

    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive {
            field,
            value: value.normalize().to_string(),
        });
    }
    Ok(value)
}

/// A price that must be present for `order_type`
pub(crate) fn require_price(
    raw: RawValue,
    field: &'static str,
    order_type: OrderType,
) -> ValidationResult<Price> {
    if raw.is_null() {
        return Err(ValidationError::Missing { field, order_type });
    }
    positive_decimal(&raw, field).map(Price::new_unchecked)
}

pub fn validate_symbol(raw: impl Into<RawValue>) -> ValidationResult<Symbol> {
    let symbol = normalized_text(&raw.into(), "Symbol")?;

    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidSymbol(symbol));
    }
    Ok(Symbol::new_unchecked(symbol))
}

pub fn validate_side(raw: impl Into<RawValue>) -> ValidationResult<Side> {
    let side = normalized_text(&raw.into(), "Side")?;
    Side::from_wire(&side).ok_or(ValidationError::InvalidSide(side))
}

/// Accepts any order type the exchange recognizes, not just the ones the
/// order entry surfaces submit.
pub fn validate_order_type(raw: impl Into<RawValue>) -> ValidationResult<OrderType> {
    let order_type = normalized_text(&raw.into(), "Order type")?;
    OrderType::from_wire(&order_type).ok_or(ValidationError::InvalidOrderType(order_type))
}

pub fn validate_quantity(raw: impl Into<RawValue>) -> ValidationResult<Quantity> {
    positive_decimal(&raw.into(), "Quantity").map(Quantity::new_unchecked)
}

/// Validate a limit price for `order_type`.
///
/// Returns `Ok(None)` only when no price was given and the order type does
/// not need one; a supplied price is always checked.
pub fn validate_price(
    raw: impl Into<RawValue>,
    order_type: OrderType,
) -> ValidationResult<Option<Price>> {
    let raw = raw.into();
    if order_type.requires_price() {
        return require_price(raw, "Price", order_type).map(Some);
    }
    if raw.is_null() {
        return Ok(None);
    }
    positive_decimal(&raw, "Price").map(|p| Some(Price::new_unchecked(p)))
}

/// Validate the trigger price of a stop-limit order
pub fn validate_stop_price(raw: impl Into<RawValue>) -> ValidationResult<Price> {
    require_price(raw.into(), "Stop price", OrderType::StopLimit)
}
