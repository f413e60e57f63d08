//! Holocron SDK - hypermedia graph resolution and caching
//!
//! Builds on [`holocron_client`] to turn single-entity reads into complete
//! views of an entity and everything it links to.
//!
//! # Architecture
//!
//! - **Aggregation**: [`GraphAggregator`] reads a primary entity and fans out
//!   over its link fields concurrently; any failed read fails the whole view
//! - **Caching**: [`ResourceCache`] keeps entities and search results for the
//!   lifetime of a session; it is filled by whoever displays entities
//! - **Transport**: [`ResourceFetcher`] is the seam between the two, implemented
//!   by [`holocron_client::ResourceClient`]
//!
//! # Example
//!
//! ```rust,ignore
//! use holocron_sdk::{GraphAggregator, ResourceCache};
//! use holocron_client::{ClientConfig, ResourceClient};
//!
//! let client = ResourceClient::new(ClientConfig::default())?;
//! let aggregator = GraphAggregator::new(client);
//! let cache = ResourceCache::new();
//!
//! let view = aggregator.film("1").await?;
//! // ... display it ...
//! cache.put_all(view.entities());
//! ```

// Core traits
pub mod traits;

// Caching primitives
pub mod cache;

// Graph aggregation
pub mod aggregate;

// Error types
pub mod error;

// Re-export core traits
pub use traits::ResourceFetcher;

// Re-export cache types
pub use cache::{CacheStats, EntityKey, ResourceCache, SearchKey};

// Re-export aggregation types
pub use aggregate::{
    FilmAggregate, GraphAggregator, PersonAggregate, PlanetAggregate, StarshipAggregate,
    VehicleAggregate,
};

// Re-export error types
pub use error::{AggregationError, Result};

// Re-export from underlying crate
pub use holocron_client;
