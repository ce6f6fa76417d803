//! Conversion: BoardResponse → Board.

use super::wire;
use super::{Board, PriceLevel};

impl From<wire::PriceResponse> for PriceLevel {
    fn from(source: wire::PriceResponse) -> Self {
        PriceLevel {
            price: source.price,
            size: source.size,
        }
    }
}

impl From<wire::BoardResponse> for Board {
    fn from(source: wire::BoardResponse) -> Self {
        Board {
            mid_price: source.mid_price,
            asks: source.asks.into_iter().map(PriceLevel::from).collect(),
            bids: source.bids.into_iter().map(PriceLevel::from).collect(),
        }
    }
}
