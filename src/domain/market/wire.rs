//! Wire types for `GET /v1/markets`.

use serde::{Deserialize, Serialize};

/// A single entry of the markets list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketResponse {
    pub product_code: String,
    pub market_type: String,
    /// Spot markets are listed without an alias.
    #[serde(default)]
    pub alias: String,
}

pub type MarketsResponse = Vec<MarketResponse>;
