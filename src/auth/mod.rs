//! Authentication: request signing for bitFlyer, token exchange types for kabucom.
//!
//! ## bitFlyer
//!
//! Private endpoints are authenticated per request. The signature is
//! `hex(HMAC-SHA256(secret, "{timestamp}{METHOD}{path}{body}"))`, sent together
//! with the key and the timestamp as `ACCESS-KEY`, `ACCESS-TIMESTAMP` and
//! `ACCESS-SIGN`. `path` includes the query string and excludes the host.
//!
//! ## kabucom
//!
//! The API password is exchanged once for a token (`POST /token`); the token
//! then goes into the `X-API-KEY` header of every call. The SDK never stores
//! it: callers pass it explicitly.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const HEADER_ACCESS_KEY: &str = "ACCESS-KEY";
pub const HEADER_ACCESS_TIMESTAMP: &str = "ACCESS-TIMESTAMP";
pub const HEADER_ACCESS_SIGN: &str = "ACCESS-SIGN";
pub const HEADER_API_KEY: &str = "X-API-KEY";

// ============================================================================
// bitFlyer credentials
// ============================================================================

/// Static API key/secret pair for bitFlyer private endpoints.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Sign a request at the given Unix timestamp.
    pub fn sign(&self, timestamp: u64, method: &str, path: &str, body: &str) -> String {
        sign(&self.api_secret, timestamp, method, path, body)
    }

    /// Build the three bitFlyer auth headers for a request.
    pub fn signed_headers(
        &self,
        timestamp: u64,
        method: &str,
        path: &str,
        body: &str,
    ) -> SignedHeaders {
        SignedHeaders {
            access_key: self.api_key.clone(),
            access_timestamp: timestamp.to_string(),
            access_sign: self.sign(timestamp, method, path, body),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Header values attached to a signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub access_key: String,
    pub access_timestamp: String,
    pub access_sign: String,
}

/// HMAC-SHA256 over `"{timestamp}{method}{path}{body}"`, lowercase hex.
pub fn sign(secret: &str, timestamp: u64, method: &str, path: &str, body: &str) -> String {
    let seed = format!("{}{}{}{}", timestamp, method, path, body);
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(seed.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Current Unix time in seconds.
pub fn unix_timestamp() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

// ============================================================================
// kabucom token exchange wire types
// ============================================================================

/// Body of `POST /token`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenRequest {
    #[serde(rename = "APIPassword")]
    pub api_password: String,
}

/// Success body of `POST /token`. `Token` may be missing or null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    #[serde(rename = "ResultCode", default)]
    pub result_code: Option<i32>,
    #[serde(rename = "Token", default)]
    pub token: Option<String>,
}
