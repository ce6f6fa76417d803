//! Environment configuration, read once at startup.

use crate::auth::Credentials;
use crate::network::{DEFAULT_BITFLYER_URL, DEFAULT_KABUCOM_URL};

pub const ENV_BITFLYER_API_KEY: &str = "BITFLYER_API_KEY";
pub const ENV_BITFLYER_API_SECRET: &str = "BITFLYER_API_SECRET";
pub const ENV_BITFLYER_API_HOST: &str = "BITFLYER_API_HOST";
pub const ENV_KABUCOM_API_HOST: &str = "KABUCOM_API_HOST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bitflyer_credentials: Credentials,
    pub bitflyer_api_host: String,
    pub kabucom_api_host: String,
}

impl Config {
    /// Load from the process environment, after an optional `.env` file.
    ///
    /// Missing credentials are left empty; the venue rejects them with 401.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bitflyer_credentials: Credentials::new(
                lookup(ENV_BITFLYER_API_KEY).unwrap_or_default(),
                lookup(ENV_BITFLYER_API_SECRET).unwrap_or_default(),
            ),
            bitflyer_api_host: non_empty(ENV_BITFLYER_API_HOST)
                .unwrap_or_else(|| DEFAULT_BITFLYER_URL.to_string()),
            kabucom_api_host: non_empty(ENV_KABUCOM_API_HOST)
                .unwrap_or_else(|| DEFAULT_KABUCOM_URL.to_string()),
        }
    }
}
