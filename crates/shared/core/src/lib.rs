//! Hermes Core Domain
//!
//! Pure domain types for the Hermes order desk: order values, the input
//! validators, and the validated order request model.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod validation;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    OrderKind, OrderRequest, OrderResult, OrderSpec, OrderType, Side, TimeInForce,
};
pub use validation::{
    RawValue, TriggerWarning, ValidationError, ValidationResult, validate_order_type,
    validate_price, validate_quantity, validate_side, validate_stop_price, validate_symbol,
    would_trigger_immediately,
};
pub use values::{Price, Quantity, Symbol};
