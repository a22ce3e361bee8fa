//! Request → wire parameters, acknowledgement → result

use hermes_core::{OrderRequest, OrderResult, OrderSpec, OrderType, TimeInForce};
use hermes_ports::{OrderParams, RawOrderResponse};

/// Exchange parameters for a validated request
///
/// Stop-limit orders go out as `STOP`: the futures API rests a limit order
/// at `price` once `stopPrice` trades.
pub fn build_order_params(request: &OrderRequest) -> OrderParams {
    let base = |order_type| {
        OrderParams::new(
            request.symbol().clone(),
            request.side(),
            order_type,
            request.quantity(),
        )
    };

    match *request.spec() {
        OrderSpec::Market => base(OrderType::Market),
        OrderSpec::Limit { price } => base(OrderType::Limit)
            .with_price(price)
            .with_time_in_force(TimeInForce::GTC),
        OrderSpec::StopLimit { stop_price, price } => base(OrderType::Stop)
            .with_stop_price(stop_price)
            .with_price(price)
            .with_time_in_force(TimeInForce::GTC),
    }
}

/// Average fill price if reported, otherwise the order's price
pub fn project_result(response: RawOrderResponse) -> OrderResult {
    OrderResult {
        order_id: response.order_id,
        status: response.status,
        average_price: response.avg_price.or(response.price),
    }
}
