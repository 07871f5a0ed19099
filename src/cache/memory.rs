//! Process-local snapshot cache.

use std::sync::Arc;

use dashmap::DashMap;

use crate::cache::{CacheError, Snapshot, SnapshotCache};

/// A thread-safe in-memory snapshot cache.
///
/// Cloning is cheap: clones share the same underlying map, so one instance
/// can be handed to every subsystem that compiles routes.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    inner: Arc<DashMap<String, Snapshot>>,
}

impl MemoryCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl SnapshotCache for MemoryCache {
    fn exists(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    fn fetch(&self, key: &str) -> Result<Option<Snapshot>, CacheError> {
        Ok(self.inner.get(key).map(|entry| entry.value().clone()))
    }

    fn store(&self, key: &str, snapshot: Snapshot) -> Result<(), CacheError> {
        self.inner.insert(key.to_string(), snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_and_fetch() {
        let cache = MemoryCache::new();
        assert!(!cache.exists("routes"));

        cache.store("routes", json!([{"ports": [80]}])).unwrap();
        assert!(cache.exists("routes"));

        let fetched = cache.fetch("routes").unwrap().unwrap();
        assert_eq!(fetched, json!([{"ports": [80]}]));
    }

    #[test]
    fn test_fetch_missing_is_none() {
        let cache = MemoryCache::new();
        assert!(cache.fetch("routes").unwrap().is_none());
    }

    #[test]
    fn test_store_overwrites() {
        let cache = MemoryCache::new();
        cache.store("routes", json!(1)).unwrap();
        cache.store("routes", json!(2)).unwrap();
        assert_eq!(cache.fetch("routes").unwrap().unwrap(), json!(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = MemoryCache::new();
        let clone = cache.clone();
        cache.store("routes", json!("x")).unwrap();
        assert!(clone.exists("routes"));
    }
}
