//! Hermes Gateway
//!
//! Exchange adapter for the Hermes order desk. Provides:
//! - [`BinanceFuturesClient`], the [`ExchangeTransport`] implementation for
//!   the Binance USD-M futures REST API (testnet by default)
//! - HMAC-SHA256 request signing
//! - Client configuration from the environment
//!
//! ## Architecture
//!
//! ```text
//!   OrderManager
//!         │ ExchangeTransport
//!    ┌────▼──────────────┐
//!    │ BinanceFutures    │  form-encode params
//!    │ Client            │  + recvWindow + timestamp
//!    └────┬──────────────┘  + signature (HMAC-SHA256)
//!         │ HTTPS, X-MBX-APIKEY
//!    ┌────▼────┐
//!    │ /fapi/* │
//!    └─────────┘
//! ```
//!
//! [`ExchangeTransport`]: hermes_ports::ExchangeTransport

pub mod client;
pub mod config;
pub mod error;
pub mod signer;

// Re-export commonly used types
pub use client::BinanceFuturesClient;
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::RestError;
pub use signer::Signer;
