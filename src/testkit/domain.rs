//! Builders for domain primitives used across tests.

use rust_decimal_macros::dec;

use crate::domain::{Price, RobotParams, Side, Volume};
use crate::service::OpenOrder;

/// A buy order with no advisory stops.
#[must_use]
pub fn buy(symbol: &str, volume: Volume, entry_price: Price) -> OpenOrder {
    OpenOrder {
        side: Side::Buy,
        symbol: symbol.to_owned(),
        volume,
        entry_price,
        stop_loss: None,
        take_profit: None,
    }
}

/// A sell order with no advisory stops.
#[must_use]
pub fn sell(symbol: &str, volume: Volume, entry_price: Price) -> OpenOrder {
    OpenOrder {
        side: Side::Sell,
        symbol: symbol.to_owned(),
        volume,
        entry_price,
        stop_loss: None,
        take_profit: None,
    }
}

/// A valid, non-default robot parameter set.
#[must_use]
pub fn robot_params() -> RobotParams {
    RobotParams::try_new(12, 26, 9, dec!(0.05), dec!(0.4), 8)
        .expect("builder parameters are valid")
}
