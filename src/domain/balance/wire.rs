//! Wire types for `GET /v1/me/getbalance`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceResponse {
    pub currency_code: String,
    pub amount: f64,
    pub available: f64,
}

pub type BalancesResponse = Vec<BalanceResponse>;
