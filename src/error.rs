//! Unified error types.
//!
//! Both venue clients report failures as [`HttpError`]. The use-case layer
//! wraps those in [`SdkError`] with a short context message. Whatever the
//! wrapping, [`SdkError::kind`] still answers which [`ErrorKind`] caused it.

use thiserror::Error;

/// Closed classification shared by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    NotFound,
    /// The venue answered, but not in a shape we can decode.
    UnknownFormat,
    /// Transport failures and any status without a dedicated kind.
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::NotFound => "resource not found",
            Self::UnknownFormat => "unknown response format",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level error returned by the use-case layer.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: HttpError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    pub(crate) fn context(context: &'static str) -> impl FnOnce(HttpError) -> SdkError {
        move |source| SdkError::Context { context, source }
    }

    /// The kind of the innermost HTTP failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Http(e) | SdkError::Context { source: e, .. } => e.kind(),
            SdkError::Io(_) => ErrorKind::Unknown,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Bad request (400): {body}")]
    BadRequest { body: String },

    #[error("Unauthorized (401): {body}")]
    Unauthorized { body: String },

    #[error("Not found (404): {body}")]
    NotFound { body: String },

    #[error("Unexpected response {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Unknown response format: {body}")]
    UnknownFormat { body: String },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid header value for {name}")]
    InvalidHeader { name: &'static str },
}

impl HttpError {
    /// Classify a non-success status code. Total over every status >= 400.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => HttpError::BadRequest { body },
            401 => HttpError::Unauthorized { body },
            404 => HttpError::NotFound { body },
            _ => HttpError::UnexpectedStatus { status, body },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpError::BadRequest { .. } => ErrorKind::BadRequest,
            HttpError::Unauthorized { .. } => ErrorKind::Unauthorized,
            HttpError::NotFound { .. } => ErrorKind::NotFound,
            HttpError::Decode { .. } | HttpError::UnknownFormat { .. } => ErrorKind::UnknownFormat,
            HttpError::Reqwest(_)
            | HttpError::UnexpectedStatus { .. }
            | HttpError::Encode(_)
            | HttpError::InvalidHeader { .. } => ErrorKind::Unknown,
        }
    }

    /// Raw response body, when the venue sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            HttpError::BadRequest { body }
            | HttpError::Unauthorized { body }
            | HttpError::NotFound { body }
            | HttpError::UnexpectedStatus { body, .. }
            | HttpError::Decode { body, .. }
            | HttpError::UnknownFormat { body } => Some(body),
            _ => None,
        }
    }
}
