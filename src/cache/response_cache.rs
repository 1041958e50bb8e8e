//! Endpoint-keyed JSON response cache.
//!
//! Entries live for the whole process: there is no TTL, no eviction and no
//! removal. Values are stored behind `Arc` so handing a cached document to a
//! caller never deep-clones it.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A thread-safe map from endpoint string to parsed JSON document.
///
/// The cache can be cloned cheaply; clones share the same storage.
#[derive(Clone, Default)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<String, Arc<Value>>>>,
}

impl ResponseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the document cached for `endpoint`.
    pub fn get(&self, endpoint: &str) -> Option<Arc<Value>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(endpoint).cloned()
    }

    /// Store a document for `endpoint` and return the cache size afterwards.
    ///
    /// Two concurrent misses on the same endpoint may both insert; the last
    /// writer wins. Both writers hold a parse of the same upstream resource,
    /// so readers cannot observe a difference.
    pub fn insert(&self, endpoint: impl Into<String>, value: Arc<Value>) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(endpoint.into(), value);
        entries.len()
    }

    /// Check whether `endpoint` has been cached.
    pub fn contains_key(&self, endpoint: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(endpoint)
    }

    /// Number of cached endpoints.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached endpoints in lexical order.
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread;

    #[test]
    fn test_insert_and_get() {
        let cache = ResponseCache::new();
        let size = cache.insert("people/1", Arc::new(json!({"name": "Luke Skywalker"})));

        assert_eq!(size, 1);
        assert_eq!(
            cache.get("people/1").as_deref(),
            Some(&json!({"name": "Luke Skywalker"}))
        );
        assert!(cache.get("people/2").is_none());
    }

    #[test]
    fn test_get_shares_the_stored_value() {
        let cache = ResponseCache::new();
        let value = Arc::new(json!({"count": 6}));
        cache.insert("films/", value.clone());

        let first = cache.get("films/").unwrap();
        let second = cache.get("films/").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &value));
    }

    #[test]
    fn test_keys_are_verbatim_and_sorted() {
        let cache = ResponseCache::new();
        cache.insert("starships/?page=2", Arc::new(json!({})));
        cache.insert("films/", Arc::new(json!({})));
        cache.insert("/films/", Arc::new(json!({})));

        assert_eq!(cache.keys(), vec!["/films/", "films/", "starships/?page=2"]);
        assert!(cache.contains_key("/films/"));
        assert!(!cache.contains_key("films"));
    }

    #[test]
    fn test_same_key_last_writer_wins() {
        let cache = ResponseCache::new();
        cache.insert("planets/?page=1", Arc::new(json!({"v": 1})));
        let size = cache.insert("planets/?page=1", Arc::new(json!({"v": 1})));

        assert_eq!(size, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clone_cache() {
        let cache1 = ResponseCache::new();
        cache1.insert("vehicles/4", Arc::new(json!({"name": "Sand Crawler"})));

        // Clone shares the same underlying map
        let cache2 = cache1.clone();
        assert!(cache2.contains_key("vehicles/4"));

        cache2.insert("vehicles/6", Arc::new(json!({"name": "T-16 skyhopper"})));
        assert!(cache1.contains_key("vehicles/6"));
    }

    #[test]
    fn test_concurrent_access() {
        let cache = ResponseCache::new();
        let cache_clone = cache.clone();

        let handle = thread::spawn(move || {
            for i in 0..100 {
                cache_clone.insert(format!("people/{}", i), Arc::new(json!(i)));
            }
        });

        for i in 100..200 {
            cache.insert(format!("people/{}", i), Arc::new(json!(i)));
        }

        handle.join().unwrap();

        assert_eq!(cache.len(), 200);
        assert_eq!(cache.get("people/150").as_deref(), Some(&json!(150)));
    }

    #[test]
    fn test_debug_format() {
        let cache = ResponseCache::new();
        cache.insert("films/", Arc::new(json!([])));

        let debug_str = format!("{:?}", cache);
        assert!(debug_str.contains("ResponseCache"));
        assert!(debug_str.contains("entries"));
    }
}
