//! Conversion: MarketResponse → Market.

use super::wire;
use super::Market;

impl From<wire::MarketResponse> for Market {
    fn from(source: wire::MarketResponse) -> Self {
        Market {
            product_code: source.product_code,
            alias: source.alias,
            market_type: source.market_type,
        }
    }
}
