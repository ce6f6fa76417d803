//! Use-case layer: backend-agnostic operations over a capability trait.
//!
//! Each use case owns its client (constructor injection) and is generic over
//! the trait, so tests substitute an in-memory double for the HTTP client.
//! Every failure is wrapped with a short context; [`crate::error::SdkError::kind`]
//! still reports the underlying [`crate::error::ErrorKind`].

pub mod bitflyer;
pub mod kabucom;

pub use bitflyer::{BitFlyerApi, BitFlyerUseCase};
pub use kabucom::{KabucomApi, KabucomUseCase};
