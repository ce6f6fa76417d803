//! Conversions: CreateOrder → SendChildOrderRequest, OrderResponse → OrderAcceptance.

use super::wire::{self, ChildOrderType, TimeInForce, MINUTE_TO_EXPIRE_DEFAULT};
use super::{CreateOrder, OrderAcceptance};

impl From<&CreateOrder> for wire::SendChildOrderRequest {
    fn from(order: &CreateOrder) -> Self {
        wire::SendChildOrderRequest {
            product_code: order.product_code.clone(),
            child_order_type: ChildOrderType::Limit,
            side: order.side(),
            price: order.price,
            size: order.size,
            minute_to_expire: MINUTE_TO_EXPIRE_DEFAULT,
            time_in_force: TimeInForce::Gtc,
        }
    }
}

impl From<wire::OrderResponse> for OrderAcceptance {
    fn from(source: wire::OrderResponse) -> Self {
        OrderAcceptance {
            acceptance_id: source.child_order_acceptance_id,
        }
    }
}
