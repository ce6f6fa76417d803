//! Board domain: order-book snapshot for a single product.

mod convert;
pub mod wire;

/// A single ask or bid level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceLevel {
    pub price: f64,
    pub size: f64,
}

/// Order-book snapshot.
///
/// `asks` and `bids` keep the order the venue returned them in. Sorting is a
/// presentation concern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    pub mid_price: f64,
    pub asks: Vec<PriceLevel>,
    pub bids: Vec<PriceLevel>,
}
