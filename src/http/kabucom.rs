//! Low-level kabucom client: `KabucomHttp`.
//!
//! Token-based: `get_token` exchanges the API password for a token, which the
//! caller passes back into every other call.

use crate::auth::{TokenRequest, TokenResponse, HEADER_API_KEY};
use crate::domain::position::wire::{PositionQuery, PositionsResponse};
use crate::error::HttpError;
use crate::network::{DEFAULT_KABUCOM_URL, DEFAULT_TIMEOUT_SECS};
use crate::usecase::KabucomApi;

use reqwest::Client;
use std::time::Duration;

/// Low-level HTTP client for the kabu station REST API.
#[derive(Debug, Clone)]
pub struct KabucomHttp {
    base_url: String,
    client: Client,
}

impl KabucomHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        Ok(Self {
            base_url: super::trim_base_url(base_url),
            client: super::build_client(timeout)?,
        })
    }

    /// Client against the local gateway's default production port.
    pub fn local() -> Result<Self, HttpError> {
        Self::new(DEFAULT_KABUCOM_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /token`
    pub async fn get_token(&self, password: &str) -> Result<String, HttpError> {
        let url = format!("{}/token", self.base_url);
        let req = self.client.post(&url).json(&TokenRequest {
            api_password: password.to_string(),
        });

        tracing::debug!(url = %url, "Requesting kabucom token");

        let (status, body) = super::execute(req).await?;
        let body = super::check_status(&url, status, body)?;

        let parsed: Option<TokenResponse> = serde_json::from_str(&body).ok();
        match parsed.and_then(|r| r.token) {
            Some(token) => Ok(token),
            None => Err(HttpError::UnknownFormat { body }),
        }
    }

    /// `GET /positions`
    pub async fn get_positions(
        &self,
        api_key: &str,
        query: &PositionQuery,
    ) -> Result<PositionsResponse, HttpError> {
        let mut url = format!("{}/positions", self.base_url);
        let params = query.to_query_string();
        if !params.is_empty() {
            url = format!("{}?{}", url, params);
        }

        let req = self.client.get(&url).header(HEADER_API_KEY, api_key);

        tracing::debug!(url = %url, "Fetching kabucom positions");

        let (status, body) = super::execute(req).await?;
        let body = super::check_status(&url, status, body)?;
        super::decode(&url, body)
    }
}

impl KabucomApi for KabucomHttp {
    async fn get_token(&self, password: &str) -> Result<String, HttpError> {
        KabucomHttp::get_token(self, password).await
    }

    async fn get_positions(
        &self,
        api_key: &str,
        query: &PositionQuery,
    ) -> Result<PositionsResponse, HttpError> {
        KabucomHttp::get_positions(self, api_key, query).await
    }
}
