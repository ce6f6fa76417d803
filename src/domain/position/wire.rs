//! Wire types for kabucom `GET /positions`.

use serde::{Deserialize, Serialize};

/// A single position as returned by the venue. Any field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PositionResponse {
    #[serde(rename = "ExecutionID")]
    pub execution_id: Option<String>,
    pub account_type: Option<i32>,
    pub symbol: Option<String>,
    pub symbol_name: Option<String>,
    pub exchange: Option<i32>,
    pub exchange_name: Option<String>,
    pub security_type: Option<i32>,
    pub execution_day: Option<i32>,
    pub price: Option<f64>,
    pub leaves_qty: Option<f64>,
    pub hold_qty: Option<f64>,
    pub side: Option<String>,
    pub expenses: Option<f64>,
    pub commission: Option<f64>,
    pub commission_tax: Option<f64>,
    pub expire_day: Option<i32>,
    pub margin_trade_type: Option<i32>,
    pub current_price: Option<f64>,
    pub valuation: Option<f64>,
    pub profit_loss: Option<f64>,
    pub profit_loss_rate: Option<f64>,
}

pub type PositionsResponse = Vec<PositionResponse>;

/// Product filter for `GET /positions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Product {
    #[default]
    All,
    Cash,
    Margin,
    Future,
    Option,
}

impl Product {
    /// Query-string value understood by the venue.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "0",
            Self::Cash => "1",
            Self::Margin => "2",
            Self::Future => "3",
            Self::Option => "4",
        }
    }
}

impl std::str::FromStr for Product {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "0" => Ok(Self::All),
            "cash" | "1" => Ok(Self::Cash),
            "margin" | "2" => Ok(Self::Margin),
            "future" | "3" => Ok(Self::Future),
            "option" | "4" => Ok(Self::Option),
            other => Err(format!("unknown product: {other}")),
        }
    }
}

/// Optional filters for `GET /positions`. Unset filters are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionQuery {
    pub product: Option<Product>,
    pub symbol: Option<String>,
    /// `"1"` for sell, `"2"` for buy.
    pub side: Option<String>,
    pub addinfo: Option<bool>,
}

impl PositionQuery {
    pub fn with_product(product: Product) -> Self {
        Self {
            product: Some(product),
            ..Self::default()
        }
    }

    /// Encoded query string without the leading `?`; empty when no filter is set.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(p) = self.product {
            params.push(format!("product={}", p.as_str()));
        }
        if let Some(s) = &self.symbol {
            params.push(format!("symbol={}", urlencoding::encode(s)));
        }
        if let Some(s) = &self.side {
            params.push(format!("side={}", urlencoding::encode(s)));
        }
        if let Some(a) = self.addinfo {
            params.push(format!("addinfo={}", a));
        }
        params.join("&")
    }
}
