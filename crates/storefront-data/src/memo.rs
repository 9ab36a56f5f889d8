//! Request-level memoization.
//!
//! Successful response bodies are kept per query key for the lifetime of the
//! cache. Nothing expires on its own; callers drop entries explicitly.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde::de::DeserializeOwned;

use crate::FetchError;

/// Response bodies keyed by query key.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the memoized body for `key`.
    ///
    /// Returns `None` if the key has not been stored.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, FetchError> {
        match self.lock().get(key) {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    /// Store a response body.
    pub fn set(&self, key: impl Into<String>, body: Vec<u8>) {
        self.lock().insert(key.into(), body);
    }

    /// Check if a key is memoized.
    pub fn exists(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Drop one entry. Returns whether it existed.
    pub fn invalidate(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Memoized keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A panic while holding the lock cannot leave a half-written entry.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let cache = QueryCache::new();
        let value: Option<Vec<String>> = cache.get("categories").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_get_invalidate() {
        let cache = QueryCache::new();
        cache.set("categories", br#"["electronics"]"#.to_vec());

        assert!(cache.exists("categories"));
        let value: Option<Vec<String>> = cache.get("categories").unwrap();
        assert_eq!(value, Some(vec!["electronics".to_string()]));

        assert!(cache.invalidate("categories"));
        assert!(!cache.invalidate("categories"));
        assert!(!cache.exists("categories"));
    }

    #[test]
    fn test_keys_and_clear() {
        let cache = QueryCache::new();
        cache.set("products", b"[]".to_vec());
        cache.set("categories", b"[]".to_vec());
        assert_eq!(cache.keys(), vec!["categories", "products"]);

        cache.clear();
        assert!(cache.keys().is_empty());
    }
}
