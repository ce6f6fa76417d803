//! Conversion: BalanceResponse → Balance.

use super::wire;
use super::Balance;

impl From<wire::BalanceResponse> for Balance {
    fn from(source: wire::BalanceResponse) -> Self {
        Balance {
            currency_code: source.currency_code,
            amount: source.amount,
            available: source.available,
        }
    }
}
