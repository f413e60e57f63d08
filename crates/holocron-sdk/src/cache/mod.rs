//! Caching primitives for resolved entities
//!
//! Provides the session-scoped entity cache shared by everything that
//! displays entities.

mod resource_cache;

pub use resource_cache::{CacheStats, EntityKey, ResourceCache, SearchKey};
