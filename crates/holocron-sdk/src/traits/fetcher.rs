//! Fetcher trait between aggregation and transport

use async_trait::async_trait;
use holocron_client::{Resource, ResourceClient, Result, Target};

/// Reads one entity, either by route identifier or by link URL.
///
/// [`ResourceClient`] is the production implementation. The aggregator is
/// generic over this trait so it can be driven by any transport.
///
/// # Example
///
/// ```rust,ignore
/// use holocron_sdk::{GraphAggregator, ResourceFetcher};
///
/// struct Recorded { /* canned responses */ }
///
/// #[async_trait]
/// impl ResourceFetcher for Recorded {
///     async fn fetch<T: Resource>(&self, target: Target<'_>) -> Result<T> {
///         // look the target up in the recording
///     }
/// }
///
/// let aggregator = GraphAggregator::new(Recorded::load("fixtures")?);
/// ```
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch a single entity of kind `T::KIND`
    async fn fetch<T: Resource>(&self, target: Target<'_>) -> Result<T>;
}

#[async_trait]
impl ResourceFetcher for ResourceClient {
    async fn fetch<T: Resource>(&self, target: Target<'_>) -> Result<T> {
        ResourceClient::fetch(self, target).await
    }
}
