//! Wire types for `GET /v1/board`.

use serde::{Deserialize, Serialize};

/// A single price level. Side is implicit from the `bids`/`asks` array.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceResponse {
    pub price: f64,
    pub size: f64,
}

/// REST response for a board snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardResponse {
    pub mid_price: f64,
    pub bids: Vec<PriceResponse>,
    pub asks: Vec<PriceResponse>,
}
