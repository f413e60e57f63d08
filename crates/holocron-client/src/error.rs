//! Error types for the resource client

use crate::resources::ResourceKind;
use thiserror::Error;

/// A single read against the API did not produce a usable entity.
///
/// All variants mean the same thing to callers: this link cannot be
/// resolved. The variant and its fields are kept for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("failed to fetch {kind}: {source}")]
    Http {
        kind: ResourceKind,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered 404
    #[error("{kind} not found: {url}")]
    NotFound { kind: ResourceKind, url: String },

    /// The API answered with another non-success status
    #[error("failed to fetch {kind}: server error {status}: {message}")]
    Server {
        kind: ResourceKind,
        status: u16,
        message: String,
    },

    /// The body was not JSON of the expected structure
    #[error("failed to decode {kind}: {source}")]
    Decode {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    /// The route identifier contained no digits
    #[error("invalid {kind} identifier: {raw:?}")]
    InvalidId { kind: ResourceKind, raw: String },
}

impl FetchError {
    /// Kind of entity the failed read was for
    pub fn kind(&self) -> ResourceKind {
        match self {
            FetchError::Http { kind, .. }
            | FetchError::NotFound { kind, .. }
            | FetchError::Server { kind, .. }
            | FetchError::Decode { kind, .. }
            | FetchError::InvalidId { kind, .. } => *kind,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

/// Result type for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;
