//! Hermes Order Manager
//!
//! The Order Manager sits between the order entry surface and the exchange
//! transport, responsible for:
//! - **Parameter Building**: Maps a validated [`OrderRequest`] onto the
//!   exchange's order placement parameters
//! - **Submission**: One transport call per order, no retries
//! - **Result Projection**: Reduces the exchange acknowledgement to an
//!   [`OrderResult`]
//! - **Trigger Advisory**: Warns when a stop order would fire immediately
//!
//! ## Architecture
//!
//! ```text
//! raw input ──► OrderRequest builders (validation, fail fast)
//!                        │
//!               ┌────────▼──────────────────────────┐
//!               │          Order Manager            │
//!               │  build_order_params (per kind)    │
//!               │  MARKET     → type=MARKET         │
//!               │  LIMIT      → type=LIMIT, GTC     │
//!               │  STOP_LIMIT → type=STOP, GTC      │
//!               └────────┬──────────────────────────┘
//!                        │ OrderParams
//!               ┌────────▼─────────┐
//!               │ ExchangeTransport│ create_order (once)
//!               └────────┬─────────┘
//!                        │ RawOrderResponse
//!                        ▼
//!                   OrderResult {orderId, status, averagePrice}
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hermes_order_manager::OrderManager;
//!
//! let manager = OrderManager::new(client);
//!
//! let request = OrderRequest::stop_limit("ETHUSDT", "SELL", 1.5, 2000, 1990)?;
//! if let Some(warning) = manager.stop_trigger_advisory(&request).await? {
//!     eprintln!("{warning}");
//! }
//! let result = manager.submit(request).await?;
//! ```
//!
//! [`OrderRequest`]: hermes_core::OrderRequest
//! [`OrderResult`]: hermes_core::OrderResult

pub mod error;
pub mod manager;
pub mod params;

// Re-export main types
pub use error::{Error, Result};
pub use manager::{OrderManager, SETTLEMENT_ASSET};
pub use params::{build_order_params, project_result};
