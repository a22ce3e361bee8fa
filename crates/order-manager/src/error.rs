//! Order Manager errors

use hermes_core::ValidationError;
use hermes_ports::TransportError;
use thiserror::Error;

/// Either the input was rejected locally or the exchange call failed.
/// No order result exists in either case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Exchange error: {0}")]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, Error>;
