//! Market domain: tradable products listed by bitFlyer.

mod convert;
pub mod wire;

/// A tradable product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    pub product_code: String,
    pub alias: String,
    pub market_type: String,
}
