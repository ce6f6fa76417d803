//! Position domain: kabucom holdings, with every wire field resolved to a value.

mod convert;
pub mod wire;

pub use wire::{PositionQuery, Product};

/// A kabucom position.
///
/// Built from [`wire::PositionResponse`]; each field the venue left out is
/// `0` or the empty string, independently of the others.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Position {
    pub execution_id: String,
    pub account_type: i32,
    pub symbol: String,
    pub symbol_name: String,
    pub exchange: i32,
    pub exchange_name: String,
    pub security_type: i32,
    pub execution_day: i32,
    pub price: f64,
    pub leaves_qty: f64,
    pub hold_qty: f64,
    pub side: String,
    pub expenses: f64,
    pub commission: f64,
    pub commission_tax: f64,
    pub expire_day: i32,
    pub margin_trade_type: i32,
    pub current_price: f64,
    pub valuation: f64,
    pub profit_loss: f64,
    pub profit_loss_rate: f64,
}
