//! HTTP client layer: one low-level client per venue.
//!
//! Both clients return wire types; conversion to domain types happens in the
//! use-case layer. Response handling is shared: read the whole body, classify
//! any status >= 400, otherwise decode JSON.

pub mod bitflyer;
pub mod kabucom;

pub use bitflyer::BitFlyerHttp;
pub use kabucom::KabucomHttp;

use crate::error::HttpError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub(crate) fn build_client(timeout: Duration) -> Result<Client, HttpError> {
    Ok(Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .build()?)
}

/// Send a prepared request and hand back `(status, body)`.
pub(crate) async fn execute(req: reqwest::RequestBuilder) -> Result<(u16, String), HttpError> {
    let resp = req.send().await?;
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    Ok((status, body))
}

/// Pass the body through on success, classify it otherwise.
pub(crate) fn check_status(url: &str, status: u16, body: String) -> Result<String, HttpError> {
    if status >= 400 {
        tracing::debug!(status, url, "Request failed");
        return Err(HttpError::from_status(status, body));
    }
    Ok(body)
}

pub(crate) fn decode<T: DeserializeOwned>(url: &str, body: String) -> Result<T, HttpError> {
    match serde_json::from_str(&body) {
        Ok(parsed) => Ok(parsed),
        Err(source) => Err(HttpError::Decode {
            url: url.to_string(),
            source,
            body,
        }),
    }
}

pub(crate) fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
