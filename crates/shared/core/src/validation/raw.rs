//! Loosely-typed input as it arrives from a form field or command line

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::entities::{OrderType, Side};
use crate::values::{Price, Quantity, Symbol};

/// A raw, not yet validated input value
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Field left empty or not supplied
    Null,
    Bool(bool),
    Number(f64),
    Decimal(Decimal),
    Text(String),
    /// Arrays, objects and other shapes no validator accepts
    Other(&'static str),
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Short name of the value's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Number(_) => "number",
            RawValue::Decimal(_) => "decimal",
            RawValue::Text(_) => "text",
            RawValue::Other(name) => *name,
        }
    }

    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric coercion
    ///
    /// Text is first read as a float so that a well-formed number `Decimal`
    /// cannot hold is told apart from text that is not a number at all.
    pub(crate) fn to_decimal(&self) -> Result<Decimal, Coercion> {
        match self {
            RawValue::Decimal(d) => Ok(*d),
            RawValue::Number(f) if f.is_finite() => fit(*f, Decimal::try_from(*f).ok()),
            RawValue::Text(s) => {
                let s = s.trim();
                let exact = Decimal::from_str(s)
                    .or_else(|_| Decimal::from_scientific(s))
                    .ok();
                match s.parse::<f64>() {
                    Ok(f) if f.is_finite() => fit(f, exact),
                    _ => exact.ok_or(Coercion::NotNumeric),
                }
            }
            _ => Err(Coercion::NotNumeric),
        }
    }

    /// `<type> '<value>'` rendering for error messages
    pub(crate) fn describe(&self) -> String {
        match self {
            RawValue::Null => "null".to_string(),
            RawValue::Bool(b) => format!("bool {}", b),
            RawValue::Number(f) => format!("number {}", f),
            RawValue::Decimal(d) => format!("decimal {}", d),
            RawValue::Text(s) => format!("text '{}'", s),
            RawValue::Other(name) => name.to_string(),
        }
    }
}

/// Why a raw value has no decimal reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Coercion {
    NotNumeric,
    /// Finite number outside `Decimal`'s range, or too small to survive
    /// rounding; carries the float reading
    OutOfRange(f64),
}

/// A decimal conversion is only kept if it did not overflow or round a
/// non-zero reading down to zero
fn fit(reading: f64, decimal: Option<Decimal>) -> Result<Decimal, Coercion> {
    match decimal {
        Some(d) if !(d.is_zero() && reading != 0.0) => Ok(d),
        _ => Err(Coercion::OutOfRange(reading)),
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<&String> for RawValue {
    fn from(s: &String) -> Self {
        RawValue::Text(s.clone())
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Number(f)
    }
}

impl From<f32> for RawValue {
    fn from(f: f32) -> Self {
        RawValue::Number(f as f64)
    }
}

impl From<i32> for RawValue {
    fn from(i: i32) -> Self {
        RawValue::Decimal(Decimal::from(i))
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Decimal(Decimal::from(i))
    }
}

impl From<u32> for RawValue {
    fn from(i: u32) -> Self {
        RawValue::Decimal(Decimal::from(i))
    }
}

impl From<u64> for RawValue {
    fn from(i: u64) -> Self {
        RawValue::Decimal(Decimal::from(i))
    }
}

impl From<Decimal> for RawValue {
    fn from(d: Decimal) -> Self {
        RawValue::Decimal(d)
    }
}

impl From<Quantity> for RawValue {
    fn from(q: Quantity) -> Self {
        RawValue::Decimal(q.value())
    }
}

impl From<Price> for RawValue {
    fn from(p: Price) -> Self {
        RawValue::Decimal(p.value())
    }
}

impl From<Symbol> for RawValue {
    fn from(s: Symbol) -> Self {
        RawValue::Text(s.as_str().to_string())
    }
}

impl From<Side> for RawValue {
    fn from(side: Side) -> Self {
        RawValue::Text(side.as_str().to_string())
    }
}

impl From<OrderType> for RawValue {
    fn from(t: OrderType) -> Self {
        RawValue::Text(t.as_str().to_string())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Decimal(Decimal::from(i)),
                None => n.as_f64().map_or(RawValue::Other("number"), RawValue::Number),
            },
            Value::String(s) => RawValue::Text(s),
            Value::Array(_) => RawValue::Other("array"),
            Value::Object(_) => RawValue::Other("object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_text_coercion() {
        assert_eq!(RawValue::from(" 0.5 ").to_decimal(), Ok(dec!(0.5)));
        assert_eq!(RawValue::from("1e3").to_decimal(), Ok(dec!(1000)));
        assert_eq!(RawValue::from("abc").to_decimal(), Err(Coercion::NotNumeric));
        assert_eq!(RawValue::from("").to_decimal(), Err(Coercion::NotNumeric));
        assert_eq!(RawValue::from("NaN").to_decimal(), Err(Coercion::NotNumeric));
        assert_eq!(RawValue::from("inf").to_decimal(), Err(Coercion::NotNumeric));
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(RawValue::from(1.5).to_decimal(), Ok(dec!(1.5)));
        assert_eq!(RawValue::from(0.0).to_decimal(), Ok(Decimal::ZERO));
        assert_eq!(RawValue::from(f64::NAN).to_decimal(), Err(Coercion::NotNumeric));
        assert_eq!(
            RawValue::from(f64::INFINITY).to_decimal(),
            Err(Coercion::NotNumeric)
        );
    }

    #[test]
    fn test_unrepresentable_numbers() {
        assert_eq!(
            RawValue::from(1e30).to_decimal(),
            Err(Coercion::OutOfRange(1e30))
        );
        assert_eq!(
            RawValue::from(1e-30).to_decimal(),
            Err(Coercion::OutOfRange(1e-30))
        );
        assert_eq!(
            RawValue::from("1e30").to_decimal(),
            Err(Coercion::OutOfRange(1e30))
        );
        assert_eq!(
            RawValue::from(" -1e-30 ").to_decimal(),
            Err(Coercion::OutOfRange(-1e-30))
        );
    }

    #[test]
    fn test_non_numeric_kinds() {
        assert_eq!(RawValue::from(true).to_decimal(), Err(Coercion::NotNumeric));
        assert_eq!(RawValue::Null.to_decimal(), Err(Coercion::NotNumeric));
        assert_eq!(RawValue::from(None::<f64>), RawValue::Null);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(RawValue::from(json!(2000)), RawValue::Decimal(dec!(2000)));
        assert_eq!(RawValue::from(json!("sell")), RawValue::Text("sell".into()));
        assert_eq!(RawValue::from(json!(null)), RawValue::Null);
        assert_eq!(RawValue::from(json!([1, 2])).type_name(), "array");
    }
}
