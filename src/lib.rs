//! # capital
//!
//! Command-line client for two venues: bitFlyer Lightning (HMAC-signed REST)
//! and kabu station (token-based REST served by a local gateway).
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Domain slices, wire types, error taxonomy
//! 2. **Auth**: bitFlyer request signing, kabucom token wire types
//! 3. **HTTP API**: `BitFlyerHttp` and `KabucomHttp`, returning wire types
//! 4. **Use cases**: `BitFlyerUseCase` / `KabucomUseCase`, generic over a capability trait
//! 5. **Presentation**: text rendering and the `capital` command line
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use capital::prelude::*;
//!
//! let client = BitFlyerHttp::production(Credentials::new("key", "secret"))?;
//! let usecase = BitFlyerUseCase::new(client);
//! let board = usecase.board("BTC_JPY").await?;
//! println!("{}", capital::render::board(&board));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types used across domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Error kinds plus the HTTP and top-level error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment configuration.
pub mod config;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Request signing and token exchange types.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// One HTTP client per venue.
pub mod http;

// ── Layer 4: Use cases ───────────────────────────────────────────────────────

pub mod usecase;

// ── Layer 5: Presentation ────────────────────────────────────────────────────

pub mod render;

pub mod cli;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::Side;

    // Domain types
    pub use crate::domain::balance::Balance;
    pub use crate::domain::board::{Board, PriceLevel};
    pub use crate::domain::market::Market;
    pub use crate::domain::order::{CreateOrder, OrderAcceptance};
    pub use crate::domain::position::{Position, PositionQuery, Product};

    // Errors
    pub use crate::error::{ErrorKind, HttpError, SdkError};

    // Network + config
    pub use crate::config::Config;
    pub use crate::network::{DEFAULT_BITFLYER_URL, DEFAULT_KABUCOM_URL};

    // Auth
    pub use crate::auth::Credentials;

    // HTTP clients
    pub use crate::http::{BitFlyerHttp, KabucomHttp};

    // Use cases
    pub use crate::usecase::{BitFlyerApi, BitFlyerUseCase, KabucomApi, KabucomUseCase};
}
