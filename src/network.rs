//! Network URL constants.

/// Default bitFlyer Lightning REST API base URL.
pub const DEFAULT_BITFLYER_URL: &str = "https://api.bitflyer.com";

/// Default kabu station API base URL (production port of the local gateway).
pub const DEFAULT_KABUCOM_URL: &str = "http://localhost:18080/kabusapi";

/// Per-request timeout applied to both venue clients.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
