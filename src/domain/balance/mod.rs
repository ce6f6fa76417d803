//! Balance domain: per-currency account balances on bitFlyer.

mod convert;
pub mod wire;

#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub currency_code: String,
    pub amount: f64,
    pub available: f64,
}
