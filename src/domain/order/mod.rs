//! Order domain: limit order creation and acceptance on bitFlyer.

mod convert;
pub mod wire;

use crate::shared::Side;

/// A limit order as requested by the user.
///
/// Always sent as `LIMIT` / `GTC`; the side comes from the `buy` flag.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrder {
    pub product_code: String,
    pub price: f64,
    pub size: f64,
    pub buy: bool,
}

impl CreateOrder {
    pub fn side(&self) -> Side {
        Side::from_buy_flag(self.buy)
    }
}

/// The venue's confirmation that an order was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAcceptance {
    pub acceptance_id: String,
}
