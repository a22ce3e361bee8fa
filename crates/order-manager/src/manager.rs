//! Order submission
//!
//! `OrderManager` owns the injected transport and turns validated requests
//! into exactly one `create_order` call each.

use hermes_core::{
    OrderKind, OrderRequest, OrderResult, OrderSpec, RawValue, Symbol, TriggerWarning,
    ValidationResult,
};
use hermes_ports::{ExchangeTransport, TransportResult};
use log::{error, info, warn};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::params::{build_order_params, project_result};

/// Asset the futures account margin is held in
pub const SETTLEMENT_ASSET: &str = "USDT";

pub struct OrderManager<T> {
    transport: T,
}

impl<T: ExchangeTransport> OrderManager<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit a validated request
    ///
    /// Transport failures are returned unchanged and mean the order is not
    /// confirmed placed.
    pub async fn submit(&self, request: OrderRequest) -> TransportResult<OrderResult> {
        let kind = request.kind();
        info!("Preparing {} order: {}", kind, request);

        let params = build_order_params(&request);
        info!("Request details: {}", params);

        match self.transport.create_order(&params).await {
            Ok(response) => {
                info!("Response details: {:?}", response);
                Ok(project_result(response))
            }
            Err(e) => {
                error!("Exchange error during {} order: {}", kind, e);
                Err(e)
            }
        }
    }

    pub async fn place_market_order(
        &self,
        symbol: impl Into<RawValue>,
        side: impl Into<RawValue>,
        quantity: impl Into<RawValue>,
    ) -> Result<OrderResult> {
        let request = checked(
            OrderKind::Market,
            OrderRequest::market(symbol, side, quantity),
        )?;
        Ok(self.submit(request).await?)
    }

    pub async fn place_limit_order(
        &self,
        symbol: impl Into<RawValue>,
        side: impl Into<RawValue>,
        quantity: impl Into<RawValue>,
        price: impl Into<RawValue>,
    ) -> Result<OrderResult> {
        let request = checked(
            OrderKind::Limit,
            OrderRequest::limit(symbol, side, quantity, price),
        )?;
        Ok(self.submit(request).await?)
    }

    pub async fn place_stop_limit_order(
        &self,
        symbol: impl Into<RawValue>,
        side: impl Into<RawValue>,
        quantity: impl Into<RawValue>,
        stop_price: impl Into<RawValue>,
        price: impl Into<RawValue>,
    ) -> Result<OrderResult> {
        let request = checked(
            OrderKind::StopLimit,
            OrderRequest::stop_limit(symbol, side, quantity, stop_price, price),
        )?;
        Ok(self.submit(request).await?)
    }

    /// Warn before submitting a stop-limit order whose trigger is already
    /// crossed. Always `None` for other kinds or when no price is known.
    pub async fn stop_trigger_advisory(
        &self,
        request: &OrderRequest,
    ) -> TransportResult<Option<TriggerWarning>> {
        let OrderSpec::StopLimit { stop_price, .. } = *request.spec() else {
            return Ok(None);
        };

        let Some(current) = self.transport.symbol_price(request.symbol()).await? else {
            warn!("No current price for {}, skipping trigger check", request.symbol());
            return Ok(None);
        };

        let warning = TriggerWarning::check(request.side(), stop_price.value(), current);
        if let Some(w) = &warning {
            warn!("{}", w);
        }
        Ok(warning)
    }

    pub async fn current_price(&self, symbol: &Symbol) -> TransportResult<Option<Decimal>> {
        self.transport.symbol_price(symbol).await
    }

    /// Balance of the settlement asset, `None` if the account has no entry
    pub async fn usdt_balance(&self) -> TransportResult<Option<Decimal>> {
        self.transport.account_balance(SETTLEMENT_ASSET).await
    }
}

fn checked(
    kind: OrderKind,
    built: ValidationResult<OrderRequest>,
) -> ValidationResult<OrderRequest> {
    built.inspect_err(|e| error!("Validation Error before placing {} order: {}", kind, e))
}
