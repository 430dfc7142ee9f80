//! Stale-time request cache keyed by URL.
//!
//! Successful GET responses are kept as raw JSON bodies for a fixed stale
//! window, so re-selecting a station or flipping the visualization mode
//! back and forth does not refetch identical data. The caller supplies the
//! clock (milliseconds since epoch), which keeps the cache testable off
//! WASM; in the browser this is `js_sys::Date::now()`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Default stale window: one minute.
pub const DEFAULT_STALE_MS: f64 = 60_000.0;

struct CacheEntry {
    body: String,
    fetched_at_ms: f64,
}

/// Keyed JSON cache, cheaply cloneable for sharing across components in a
/// single-threaded WASM environment.
#[derive(Clone)]
pub struct QueryCache {
    entries: Rc<RefCell<HashMap<String, CacheEntry>>>,
    stale_ms: f64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::with_stale_ms(DEFAULT_STALE_MS)
    }

    pub fn with_stale_ms(stale_ms: f64) -> Self {
        Self {
            entries: Rc::new(RefCell::new(HashMap::new())),
            stale_ms,
        }
    }

    /// Fresh cached body for `key`, or `None` if absent or stale.
    /// Stale entries are evicted on lookup.
    pub fn get(&self, key: &str, now_ms: f64) -> Option<String> {
        let mut entries = self.entries.borrow_mut();
        match entries.get(key) {
            Some(entry) if now_ms - entry.fetched_at_ms < self.stale_ms => {
                Some(entry.body.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a response body, replacing any previous entry for `key`.
    pub fn put(&self, key: &str, body: String, now_ms: f64) {
        self.entries.borrow_mut().insert(
            key.to_string(),
            CacheEntry {
                body,
                fetched_at_ms: now_ms,
            },
        );
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_is_returned() {
        let cache = QueryCache::with_stale_ms(1_000.0);
        cache.put("/stations", "[]".to_string(), 0.0);
        assert_eq!(cache.get("/stations", 500.0), Some("[]".to_string()));
    }

    #[test]
    fn stale_entry_is_evicted() {
        let cache = QueryCache::with_stale_ms(1_000.0);
        cache.put("/stations", "[]".to_string(), 0.0);
        assert_eq!(cache.get("/stations", 1_000.0), None);
        assert!(cache.is_empty(), "stale lookup should evict the entry");
    }

    #[test]
    fn put_replaces_previous_entry() {
        let cache = QueryCache::with_stale_ms(1_000.0);
        cache.put("k", "old".to_string(), 0.0);
        cache.put("k", "new".to_string(), 900.0);
        // Fresh relative to the second put even though the first is stale
        assert_eq!(cache.get("k", 1_500.0), Some("new".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clones_share_entries() {
        let cache = QueryCache::new();
        let clone = cache.clone();
        cache.put("k", "v".to_string(), 0.0);
        assert_eq!(clone.get("k", 1.0), Some("v".to_string()));
        clone.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn missing_key_is_none() {
        let cache = QueryCache::new();
        assert_eq!(cache.get("nope", 0.0), None);
    }
}
