//! Hermes Ports
//!
//! Port definitions (traits) for the Hermes order desk.
//! These define the boundary between order submission and the exchange
//! transport, together with the wire contract both sides agree on.

mod error;
mod transport;
mod wire;

pub use error::{TransportError, TransportResult};
pub use transport::ExchangeTransport;
pub use wire::{OrderParams, RawOrderResponse};
