//! Presentation: turns use-case results into the text the CLI prints.
//!
//! Numbers are printed with six fractional digits. This is the only layer
//! that turns an [`SdkError`] into final user-facing text.

use crate::domain::balance::Balance;
use crate::domain::board::{Board, PriceLevel};
use crate::domain::market::Market;
use crate::domain::order::OrderAcceptance;
use crate::domain::position::Position;
use crate::error::SdkError;

/// Levels shown per side of the board.
pub const BOARD_DEPTH: usize = 10;

pub const UNAUTHORIZED_MESSAGE: &str =
    "authorization key is missing or invalid. please check your configuration.";

pub fn markets(markets: &[Market]) -> String {
    let mut output = String::from("Product Code, Alias, Market Type\n");
    for m in markets {
        output.push_str(&format!(
            "{}, {}, {}\n",
            m.product_code, m.alias, m.market_type
        ));
    }
    output
}

/// Asks are sorted by price, highest first, and only the last
/// [`BOARD_DEPTH`] of them are shown: the lowest asks, still descending.
/// Bids are shown as the venue sent them, first [`BOARD_DEPTH`] only.
pub fn board(board: &Board) -> String {
    let mut asks = board.asks.clone();
    asks.sort_by(|a, b| b.price.total_cmp(&a.price));
    let start = asks.len().saturating_sub(BOARD_DEPTH);

    let mut output = format!("mid_price: {:.6}\n", board.mid_price);

    output.push_str("\nAsk\n===========\n");
    for level in &asks[start..] {
        output.push_str(&price_level(level));
    }

    output.push_str("\nBid\n===========\n");
    for level in board.bids.iter().take(BOARD_DEPTH) {
        output.push_str(&price_level(level));
    }

    output
}

fn price_level(level: &PriceLevel) -> String {
    format!("Price: {:.6}, Size: {:.6}\n", level.price, level.size)
}

pub fn balances(balances: &[Balance]) -> String {
    balances
        .iter()
        .map(|b| format!("{}, {:.6}, {:.6}\n", b.currency_code, b.amount, b.available))
        .collect()
}

pub fn order(acceptance: &OrderAcceptance) -> String {
    format!("child_order_acceptance_id: {}\n", acceptance.acceptance_id)
}

pub fn token(token: &str) -> String {
    format!("token: {}\n", token)
}

pub fn positions(positions: &[Position]) -> String {
    let mut output = String::from(
        "Symbol, Symbol Name, Exchange, Side, Hold Qty, Leaves Qty, Price, Current Price, Valuation, Profit Loss, Profit Loss Rate\n",
    );
    for p in positions {
        output.push_str(&format!(
            "{}, {}, {}, {}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}\n",
            p.symbol,
            p.symbol_name,
            p.exchange_name,
            p.side,
            p.hold_qty,
            p.leaves_qty,
            p.price,
            p.current_price,
            p.valuation,
            p.profit_loss,
            p.profit_loss_rate,
        ));
    }
    output
}

/// Final text for a failed command.
pub fn error(err: &SdkError) -> String {
    if err.is_unauthorized() {
        return UNAUTHORIZED_MESSAGE.to_string();
    }
    err.to_string()
}
