use async_trait::async_trait;
use hermes_core::Symbol;
use rust_decimal::Decimal;

use crate::error::TransportResult;
use crate::wire::{OrderParams, RawOrderResponse};

/// Port for the exchange's order-entry and account API
///
/// Implementations own connection handling, authentication and request
/// signing. Each call is a single attempt; retrying is left to the caller.
#[async_trait]
pub trait ExchangeTransport: Send + Sync {
    /// Place one order and return the exchange acknowledgement
    async fn create_order(&self, params: &OrderParams) -> TransportResult<RawOrderResponse>;

    /// Latest traded price for `symbol`, `None` if the exchange has none
    async fn symbol_price(&self, symbol: &Symbol) -> TransportResult<Option<Decimal>>;

    /// Balance of `asset` in the futures account, `None` if the account
    /// holds no entry for it
    async fn account_balance(&self, asset: &str) -> TransportResult<Option<Decimal>>;
}

#[async_trait]
impl<T: ExchangeTransport + ?Sized> ExchangeTransport for std::sync::Arc<T> {
    async fn create_order(&self, params: &OrderParams) -> TransportResult<RawOrderResponse> {
        (**self).create_order(params).await
    }

    async fn symbol_price(&self, symbol: &Symbol) -> TransportResult<Option<Decimal>> {
        (**self).symbol_price(symbol).await
    }

    async fn account_balance(&self, asset: &str) -> TransportResult<Option<Decimal>> {
        (**self).account_balance(asset).await
    }
}
