//! Session-wide cache of resolved entities and search results
//!
//! - Entities are keyed by kind and local identifier
//! - Search results are keyed by kind and raw query text
//! - Writes replace the previous value outright (last-write-wins)
//! - Nothing is evicted; the cache lives as long as its last handle
//!
//! The cache never performs network reads. Callers check it, fall back to a
//! fetch on a miss, and populate it once they have displayed what they fetched.

use dashmap::DashMap;
use holocron_client::{resolve_id, Entity, Resource, ResourceKind};
use std::sync::Arc;
use tracing::{debug, trace};

/// Cache key for a single entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    pub kind: ResourceKind,
    pub id: String,
}

impl EntityKey {
    pub fn new(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Key under which an entity is stored
    pub fn of(entity: &Entity) -> Self {
        Self::new(entity.kind(), resolve_id(entity.url()))
    }
}

/// Cache key for a search result list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub kind: ResourceKind,
    pub query: String,
}

/// Entry counts, for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entities: usize,
    pub searches: usize,
}

#[derive(Debug, Default)]
struct CacheInner {
    entities: DashMap<EntityKey, Entity>,
    searches: DashMap<SearchKey, Vec<Entity>>,
}

/// Shared in-memory entity cache
///
/// Cloning the cache clones the handle, not the contents: every clone sees
/// the same entries. Construct one per session and pass it to whatever
/// displays entities.
///
/// # Example
///
/// ```rust,ignore
/// use holocron_sdk::ResourceCache;
///
/// let cache = ResourceCache::new();
///
/// // After rendering a search page
/// cache.put_search_results("Skywalker", &page.results);
///
/// // Direct navigation to one of the matches is now a hit
/// let luke = cache.get_entity::<Person>("1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceCache {
    inner: Arc<CacheInner>,
}

impl ResourceCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entity under its kind and local identifier, replacing any
    /// previous value.
    pub fn put(&self, entity: Entity) {
        let key = EntityKey::of(&entity);
        trace!(kind = %key.kind, id = %key.id, "cache put");
        self.inner.entities.insert(key, entity);
    }

    /// Store a typed entity
    pub fn put_entity<T: Resource>(&self, entity: &T) {
        self.put(entity.clone().into_entity());
    }

    /// Store several entities of any kind
    pub fn put_all(&self, entities: impl IntoIterator<Item = Entity>) {
        for entity in entities {
            self.put(entity);
        }
    }

    /// Store a search result list under its raw query text.
    ///
    /// Every result is also stored individually, so a later direct lookup of
    /// any match hits the cache.
    pub fn put_search_results<T: Resource>(&self, query: &str, results: &[T]) {
        let entities: Vec<Entity> = results.iter().cloned().map(Resource::into_entity).collect();

        for entity in &entities {
            self.put(entity.clone());
        }

        debug!(kind = %T::KIND, query, count = entities.len(), "cache search results");
        self.inner.searches.insert(
            SearchKey {
                kind: T::KIND,
                query: query.to_string(),
            },
            entities,
        );
    }

    /// Look up an entity by local identifier
    pub fn get_entity<T: Resource>(&self, id: &str) -> Option<T> {
        let key = EntityKey::new(T::KIND, id);
        let hit = self
            .inner
            .entities
            .get(&key)
            .and_then(|entry| T::from_entity(entry.value().clone()));
        trace!(kind = %T::KIND, id, hit = hit.is_some(), "cache get");
        hit
    }

    /// Look up a previously stored search, in its original order
    pub fn get_search_results<T: Resource>(&self, query: &str) -> Option<Vec<T>> {
        let key = SearchKey {
            kind: T::KIND,
            query: query.to_string(),
        };
        let entry = self.inner.searches.get(&key)?;
        let results = entry.value().iter().cloned().map(T::from_entity).collect();
        results
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.inner.entities.contains_key(key)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entities: self.inner.entities.len(),
            searches: self.inner.searches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entities.is_empty() && self.inner.searches.is_empty()
    }
}
