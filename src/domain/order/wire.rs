//! Wire types for `POST /v1/me/sendchildorder`.

use crate::shared::Side;
use serde::{Deserialize, Serialize};

/// Default `minute_to_expire`: 30 days.
pub const MINUTE_TO_EXPIRE_DEFAULT: u32 = 43200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChildOrderType {
    Limit,
    Market,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good-til-cancelled.
    #[default]
    #[serde(rename = "GTC")]
    Gtc,
    /// Immediate-or-cancel.
    #[serde(rename = "IOC")]
    Ioc,
    /// Fill-or-kill.
    #[serde(rename = "FOK")]
    Fok,
}

/// Request body for a new child order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendChildOrderRequest {
    pub product_code: String,
    pub child_order_type: ChildOrderType,
    pub side: Side,
    pub price: f64,
    pub size: f64,
    pub minute_to_expire: u32,
    pub time_in_force: TimeInForce,
}

/// Response body for a new child order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResponse {
    pub child_order_acceptance_id: String,
}
