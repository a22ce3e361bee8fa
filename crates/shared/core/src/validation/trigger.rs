//! Immediate-trigger advisory for stop orders

use rust_decimal::Decimal;
use std::fmt;

use crate::entities::Side;

/// Whether a stop at `stop_price` is already crossed at `current_price`.
///
/// A buy stop fires once the market trades at or above the trigger, a sell
/// stop once it trades at or below it. Advisory only, never blocks an order.
pub fn would_trigger_immediately(stop_price: Decimal, current_price: Decimal, side: Side) -> bool {
    match side {
        Side::Buy => current_price >= stop_price,
        Side::Sell => current_price <= stop_price,
    }
}

/// Warning shown before submitting a stop order that would fire at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerWarning {
    pub side: Side,
    pub stop_price: Decimal,
    pub current_price: Decimal,
}

impl TriggerWarning {
    pub fn check(side: Side, stop_price: Decimal, current_price: Decimal) -> Option<Self> {
        would_trigger_immediately(stop_price, current_price, side).then_some(Self {
            side,
            stop_price,
            current_price,
        })
    }
}

impl fmt::Display for TriggerWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A {} stop order at {} would trigger immediately since the current price is {}.",
            self.side, self.stop_price, self.current_price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_buy_stop() {
        assert!(would_trigger_immediately(dec!(100), dec!(105), Side::Buy));
        assert!(!would_trigger_immediately(dec!(100), dec!(95), Side::Buy));
    }

    #[test]
    fn test_sell_stop() {
        assert!(would_trigger_immediately(dec!(100), dec!(95), Side::Sell));
        assert!(!would_trigger_immediately(dec!(100), dec!(105), Side::Sell));
    }

    #[test]
    fn test_boundary_triggers_both_sides() {
        assert!(would_trigger_immediately(dec!(100), dec!(100), Side::Buy));
        assert!(would_trigger_immediately(dec!(100), dec!(100.00), Side::Sell));
    }

    #[test]
    fn test_warning() {
        assert_eq!(TriggerWarning::check(Side::Buy, dec!(100), dec!(95)), None);

        let warning = TriggerWarning::check(Side::Buy, dec!(100), dec!(105)).unwrap();
        assert_eq!(
            warning.to_string(),
            "A BUY stop order at 100 would trigger immediately since the current price is 105."
        );
    }
}
