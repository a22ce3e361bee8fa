//! Order Manager Integration Test
//!
//! Drives the submitter against an in-memory transport that records every
//! call and answers from a script.

use async_trait::async_trait;
use hermes_core::{OrderRequest, OrderType, Side, Symbol, TimeInForce, ValidationError};
use hermes_order_manager::{Error, OrderManager};
use hermes_ports::{
    ExchangeTransport, OrderParams, RawOrderResponse, TransportError, TransportResult,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

/// Records orders and replies with the configured outcome
struct RecordingTransport {
    orders: Mutex<Vec<OrderParams>>,
    reply: TransportResult<RawOrderResponse>,
    price: Option<Decimal>,
    price_lookups: Mutex<usize>,
    usdt: Option<Decimal>,
}

impl RecordingTransport {
    fn replying(reply: TransportResult<RawOrderResponse>) -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            reply,
            price: None,
            price_lookups: Mutex::new(0),
            usdt: None,
        }
    }

    fn accepting() -> Self {
        let mut ack = RawOrderResponse::new(1001, "NEW");
        ack.price = Some(dec!(1990));
        Self::replying(Ok(ack))
    }

    fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    fn orders(&self) -> Vec<OrderParams> {
        self.orders.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExchangeTransport for RecordingTransport {
    async fn create_order(&self, params: &OrderParams) -> TransportResult<RawOrderResponse> {
        self.orders.lock().unwrap().push(params.clone());
        self.reply.clone()
    }

    async fn symbol_price(&self, _symbol: &Symbol) -> TransportResult<Option<Decimal>> {
        *self.price_lookups.lock().unwrap() += 1;
        Ok(self.price)
    }

    async fn account_balance(&self, asset: &str) -> TransportResult<Option<Decimal>> {
        Ok(if asset == "USDT" { self.usdt } else { None })
    }
}

#[tokio::test]
async fn test_stop_limit_submission() {
    let _ = env_logger::try_init();
    let manager = OrderManager::new(RecordingTransport::accepting());

    let req = OrderRequest::stop_limit("ethusdt", "sell", 1.5, 2000, 1990).unwrap();
    let result = manager.submit(req).await.unwrap();

    assert_eq!(result.order_id, 1001);
    assert_eq!(result.status, "NEW");
    assert_eq!(result.average_price, Some(dec!(1990)));

    let orders = manager.transport().orders();
    assert_eq!(orders.len(), 1);
    let sent = &orders[0];
    assert_eq!(sent.symbol.as_str(), "ETHUSDT");
    assert_eq!(sent.side, Side::Sell);
    assert_eq!(sent.order_type, OrderType::Stop);
    assert_eq!(sent.quantity.value(), dec!(1.5));
    assert_eq!(sent.stop_price.map(|p| p.value()), Some(dec!(2000)));
    assert_eq!(sent.price.map(|p| p.value()), Some(dec!(1990)));
    assert_eq!(sent.time_in_force, Some(TimeInForce::GTC));
}

#[tokio::test]
async fn test_market_never_sends_price_or_tif() {
    let _ = env_logger::try_init();
    let manager = OrderManager::new(RecordingTransport::accepting());

    manager
        .place_market_order("BTCUSDT", "BUY", "0.01")
        .await
        .unwrap();

    let sent = &manager.transport().orders()[0];
    assert_eq!(sent.order_type, OrderType::Market);
    assert_eq!(sent.price, None);
    assert_eq!(sent.time_in_force, None);
    assert_eq!(sent.pairs().len(), 4);
}

#[tokio::test]
async fn test_limit_order_convenience() {
    let _ = env_logger::try_init();
    let manager = OrderManager::new(RecordingTransport::accepting());

    manager
        .place_limit_order("btcusdt", "sell", 0.5, "70000")
        .await
        .unwrap();

    let sent = &manager.transport().orders()[0];
    assert_eq!(sent.order_type, OrderType::Limit);
    assert_eq!(sent.price.map(|p| p.value()), Some(dec!(70000)));
    assert_eq!(sent.time_in_force, Some(TimeInForce::GTC));
}

#[tokio::test]
async fn test_validation_failure_never_reaches_transport() {
    let _ = env_logger::try_init();
    let manager = OrderManager::new(RecordingTransport::accepting());

    let err = manager
        .place_stop_limit_order("ETHUSDT", "SELL", 1, None::<f64>, 1990)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::Validation(ValidationError::Missing {
            field: "Stop price",
            order_type: OrderType::StopLimit
        })
    );

    let err = manager
        .place_market_order("BTC-USDT", "BUY", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::InvalidSymbol(_))));

    assert!(manager.transport().orders().is_empty());
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let _ = env_logger::try_init();
    let rejection = TransportError::Api {
        code: -2019,
        msg: "Margin is insufficient.".to_string(),
    };
    let manager = OrderManager::new(RecordingTransport::replying(Err(rejection.clone())));

    let req = OrderRequest::limit("BTCUSDT", "BUY", 1, 65000).unwrap();
    assert_eq!(manager.submit(req).await.unwrap_err(), rejection);

    let err = manager
        .place_market_order("BTCUSDT", "BUY", 1)
        .await
        .unwrap_err();
    assert_eq!(err, Error::Transport(rejection));

    // one attempt per submission, no retry
    assert_eq!(manager.transport().orders().len(), 2);
}

#[tokio::test]
async fn test_trigger_advisory() {
    let _ = env_logger::try_init();
    let manager = OrderManager::new(RecordingTransport::accepting().with_price(dec!(105)));

    let buy_stop = OrderRequest::stop_limit("BTCUSDT", "BUY", 1, 100, 101).unwrap();
    let warning = manager.stop_trigger_advisory(&buy_stop).await.unwrap().unwrap();
    assert_eq!(warning.side, Side::Buy);
    assert_eq!(warning.stop_price, dec!(100));
    assert_eq!(warning.current_price, dec!(105));

    let sell_stop = OrderRequest::stop_limit("BTCUSDT", "SELL", 1, 100, 99).unwrap();
    assert_eq!(manager.stop_trigger_advisory(&sell_stop).await.unwrap(), None);

    // advisory never submits
    assert!(manager.transport().orders().is_empty());
}

#[tokio::test]
async fn test_trigger_advisory_skips_other_kinds_and_unknown_price() {
    let _ = env_logger::try_init();
    let manager = OrderManager::new(RecordingTransport::accepting());

    let limit = OrderRequest::limit("BTCUSDT", "BUY", 1, 100).unwrap();
    assert_eq!(manager.stop_trigger_advisory(&limit).await.unwrap(), None);
    assert_eq!(*manager.transport().price_lookups.lock().unwrap(), 0);

    let stop = OrderRequest::stop_limit("BTCUSDT", "BUY", 1, 100, 101).unwrap();
    assert_eq!(manager.stop_trigger_advisory(&stop).await.unwrap(), None);
    assert_eq!(*manager.transport().price_lookups.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_shared_transport_and_balance() {
    let _ = env_logger::try_init();
    let mut transport = RecordingTransport::accepting();
    transport.usdt = Some(dec!(15000));
    let transport = Arc::new(transport);
    let manager = OrderManager::new(Arc::clone(&transport));

    assert_eq!(manager.usdt_balance().await.unwrap(), Some(dec!(15000)));

    manager.place_market_order("ETHUSDT", "SELL", 2).await.unwrap();
    assert_eq!(transport.orders().len(), 1);
}

#[tokio::test]
async fn test_missing_usdt_balance() {
    let _ = env_logger::try_init();
    let manager = OrderManager::new(RecordingTransport::accepting());
    assert_eq!(manager.usdt_balance().await.unwrap(), None);
}
