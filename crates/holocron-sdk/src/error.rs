//! Error types for the holocron SDK

use holocron_client::{FetchError, ResourceKind};
use thiserror::Error;

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, AggregationError>;

/// An aggregate could not be assembled.
///
/// Aggregation is all-or-nothing: no partially resolved view is ever
/// returned alongside this error.
#[derive(Error, Debug)]
pub enum AggregationError {
    /// The primary entity could not be read
    #[error("failed to load {kind} {id}: {source}")]
    Primary {
        kind: ResourceKind,
        id: String,
        #[source]
        source: FetchError,
    },

    /// One entry of a link field could not be read
    #[error("failed to resolve {field} of {kind} {id}: {source}")]
    Link {
        kind: ResourceKind,
        id: String,
        field: &'static str,
        #[source]
        source: FetchError,
    },
}

impl AggregationError {
    /// The underlying read failure
    pub fn fetch_error(&self) -> &FetchError {
        match self {
            AggregationError::Primary { source, .. } | AggregationError::Link { source, .. } => {
                source
            }
        }
    }

    /// Whether the failure was the API reporting a missing entity
    pub fn is_not_found(&self) -> bool {
        self.fetch_error().is_not_found()
    }
}
