//! Low-level bitFlyer client: `BitFlyerHttp`.
//!
//! One method per endpoint. Private endpoints are signed with the static
//! API key/secret; public endpoints carry no auth headers at all.

use crate::auth::{
    self, Credentials, HEADER_ACCESS_KEY, HEADER_ACCESS_SIGN, HEADER_ACCESS_TIMESTAMP,
};
use crate::domain::balance::wire::BalancesResponse;
use crate::domain::board::wire::BoardResponse;
use crate::domain::market::wire::MarketsResponse;
use crate::domain::order::wire::{OrderResponse, SendChildOrderRequest};
use crate::error::HttpError;
use crate::network::{DEFAULT_BITFLYER_URL, DEFAULT_TIMEOUT_SECS};
use crate::usecase::BitFlyerApi;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the bitFlyer Lightning REST API.
#[derive(Debug, Clone)]
pub struct BitFlyerHttp {
    base_url: String,
    client: Client,
    credentials: Credentials,
}

impl BitFlyerHttp {
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, credentials, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, HttpError> {
        Ok(Self {
            base_url: super::trim_base_url(base_url),
            client: super::build_client(timeout)?,
            credentials,
        })
    }

    /// Client against the production API.
    pub fn production(credentials: Credentials) -> Result<Self, HttpError> {
        Self::new(DEFAULT_BITFLYER_URL, credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Public ───────────────────────────────────────────────────────────

    /// `GET /v1/markets`
    pub async fn get_markets(&self) -> Result<MarketsResponse, HttpError> {
        self.get("/v1/markets", false).await
    }

    /// `GET /v1/board`
    pub async fn get_board(&self, product_code: &str) -> Result<BoardResponse, HttpError> {
        let path = format!(
            "/v1/board?product_code={}",
            urlencoding::encode(product_code)
        );
        self.get(&path, false).await
    }

    // ── Private ──────────────────────────────────────────────────────────

    /// `GET /v1/me/getbalance`
    pub async fn get_balance(&self) -> Result<BalancesResponse, HttpError> {
        self.get("/v1/me/getbalance", true).await
    }

    /// `POST /v1/me/sendchildorder`
    pub async fn send_child_order(
        &self,
        request: &SendChildOrderRequest,
    ) -> Result<OrderResponse, HttpError> {
        self.request(Method::POST, "/v1/me/sendchildorder", Some(request), true)
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str, signed: bool) -> Result<T, HttpError> {
        self.request(Method::GET, path, None::<&()>, signed).await
    }

    /// `path` is what gets signed: it starts with `/` and includes the query.
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        signed: bool,
    ) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, path);

        let body = match body {
            Some(b) => serde_json::to_string(b).map_err(HttpError::Encode)?,
            None => String::new(),
        };

        let mut req = self.client.request(method.clone(), &url);

        if signed {
            let headers = self.credentials.signed_headers(
                auth::unix_timestamp(),
                method.as_str(),
                path,
                &body,
            );
            req = req
                .header(HEADER_ACCESS_KEY, header_value(HEADER_ACCESS_KEY, &headers.access_key)?)
                .header(HEADER_ACCESS_TIMESTAMP, headers.access_timestamp)
                .header(HEADER_ACCESS_SIGN, headers.access_sign);
        }

        if method == Method::POST {
            req = req
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        tracing::debug!(method = %method, url = %url, signed, "Sending bitFlyer request");

        let (status, text) = super::execute(req).await?;
        let text = super::check_status(&url, status, text)?;
        super::decode(&url, text)
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(value).map_err(|_| HttpError::InvalidHeader { name })
}

impl BitFlyerApi for BitFlyerHttp {
    async fn get_markets(&self) -> Result<MarketsResponse, HttpError> {
        BitFlyerHttp::get_markets(self).await
    }

    async fn get_board(&self, product_code: &str) -> Result<BoardResponse, HttpError> {
        BitFlyerHttp::get_board(self, product_code).await
    }

    async fn get_balance(&self) -> Result<BalancesResponse, HttpError> {
        BitFlyerHttp::get_balance(self).await
    }

    async fn send_child_order(
        &self,
        request: &SendChildOrderRequest,
    ) -> Result<OrderResponse, HttpError> {
        BitFlyerHttp::send_child_order(self, request).await
    }
}
