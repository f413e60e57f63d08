//! HTTP client for the hypermedia API

use crate::error::{FetchError, Result};
use crate::id::sanitize_id;
use crate::resources::{Resource, ResourceKind};
use crate::types::*;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the hypermedia API
///
/// Performs exactly one GET per call. It never retries and never consults
/// an in-process cache; callers that want to avoid repeat reads check their
/// cache first.
///
/// # Example
///
/// ```rust,no_run
/// use holocron_client::{ClientConfig, Person, Planet, ResourceClient, Target};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ResourceClient::new(ClientConfig::default())?;
///
/// // Enter by route parameter
/// let luke: Person = client.fetch(Target::Id("1")).await?;
///
/// // Follow one of its links
/// let homeworld: Planet = client.fetch_url(&luke.homeworld).await?;
///
/// // Search a collection
/// let matches = client.search::<Person>("Skywalker").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceClient {
    config: ClientConfig,
    client: Client,
    policy: CachePolicy,
}

impl ResourceClient {
    /// Create a new resource client
    pub fn new(config: ClientConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let policy = CachePolicy::Revalidate(Duration::from_secs(config.revalidate_secs));

        Ok(Self {
            config,
            client,
            policy,
        })
    }

    /// Caching hint sent when the caller does not pick one
    pub fn default_policy(&self) -> CachePolicy {
        self.policy
    }

    // ==================== Single entities ====================

    /// Fetch one entity with the client's default cache hint
    pub async fn fetch<T: Resource>(&self, target: Target<'_>) -> Result<T> {
        self.fetch_with(target, self.policy).await
    }

    /// Fetch one entity with an explicit cache hint
    pub async fn fetch_with<T: Resource>(&self, target: Target<'_>, policy: CachePolicy) -> Result<T> {
        let url = self.target_url(T::KIND, target)?;
        self.get_json(T::KIND, &url, policy).await
    }

    /// Follow a link field
    pub async fn fetch_url<T: Resource>(&self, url: &str) -> Result<T> {
        self.fetch(Target::Url(url)).await
    }

    /// Enter by route identifier
    pub async fn fetch_id<T: Resource>(&self, id: &str) -> Result<T> {
        self.fetch(Target::Id(id)).await
    }

    // ==================== Collections ====================

    /// Fetch one page of a collection (pages start at 1)
    pub async fn list<T: Resource>(&self, page: u32) -> Result<Page<T>> {
        let url = format!("{}?page={}", self.collection_url(T::KIND), page.max(1));
        self.get_json(T::KIND, &url, self.policy).await
    }

    /// Free-text search over a collection
    pub async fn search<T: Resource>(&self, query: &str) -> Result<Page<T>> {
        let url = format!(
            "{}?search={}",
            self.collection_url(T::KIND),
            urlencoding::encode(query)
        );
        self.get_json(T::KIND, &url, self.policy).await
    }

    // ==================== Helper Methods ====================

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}/", self.base_url(), kind.path())
    }

    fn target_url(&self, kind: ResourceKind, target: Target<'_>) -> Result<String> {
        match target {
            Target::Url(url) => Ok(url.to_string()),
            Target::Id(raw) => {
                let id = sanitize_id(raw);
                if id.is_empty() {
                    warn!(%kind, raw, "rejected identifier without digits");
                    return Err(FetchError::InvalidId {
                        kind,
                        raw: raw.to_string(),
                    });
                }
                Ok(format!("{}{}/", self.collection_url(kind), id))
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        url: &str,
        policy: CachePolicy,
    ) -> Result<T> {
        debug!(%kind, url, "GET");

        let mut request = self.client.get(url);
        if let Some(value) = policy.header_value() {
            request = request.header(header::CACHE_CONTROL, value);
        }

        let response = request
            .send()
            .await
            .map_err(|source| FetchError::Http { kind, source })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                kind,
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Server {
                kind,
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Http { kind, source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { kind, source })
    }
}
