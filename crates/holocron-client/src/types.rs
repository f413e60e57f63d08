//! Request and response types for the resource client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Revalidation window advertised to HTTP caches (default: 1 hour)
    pub revalidate_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://swapi.dev/api".to_string(),
            timeout_secs: 30,
            revalidate_secs: 60 * 60,
        }
    }
}

/// Caching hint attached to an outgoing request.
///
/// This only informs HTTP-level caches between us and the API. It has no
/// effect on the in-process resource cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Send `Cache-Control: max-age=<secs>`
    Revalidate(Duration),
    /// Send no caching header
    Unhinted,
}

impl CachePolicy {
    pub(crate) fn header_value(&self) -> Option<String> {
        match self {
            CachePolicy::Revalidate(window) => Some(format!("max-age={}", window.as_secs())),
            CachePolicy::Unhinted => None,
        }
    }
}

/// What to fetch: a route identifier or a link followed from another entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Free-form route identifier, sanitized to digits before use
    Id(&'a str),
    /// Absolute URL taken from a link field
    Url(&'a str),
}

/// One page of a list or search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of matches across all pages
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    /// Matches on this page, in API order
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}
