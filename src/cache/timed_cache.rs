//! Time-based cache with TTL (Time To Live) support.
//!
//! This module provides a thread-safe cache whose entries stop being served once
//! they are older than the configured TTL. Stale entries are not evicted; they are
//! overwritten by the next fetch for the same key.

use crate::metrics::Metrics;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A cache entry with a timestamp.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// A thread-safe cache with time-based expiration.
///
/// The cache can be cloned cheaply (uses Arc internally); clones share entries.
/// The lock is never held across an `.await`, so two concurrent misses on the same
/// key may both fetch. The later write wins.
#[derive(Clone)]
pub struct TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    cache: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    ttl: Duration,
    metrics: Option<Metrics>,
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new TimedCache with the specified TTL in seconds.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::from_secs(ttl_seconds),
            metrics: None,
        }
    }

    /// Record every lookup as a cache hit or miss in `metrics`.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Insert a value into the cache.
    ///
    /// If a value with the same key already exists, it will be replaced.
    pub fn insert(&self, key: K, value: V) {
        let entry = CacheEntry {
            value,
            inserted_at: Instant::now(),
        };

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key, entry);
        }
    }

    /// Get a value from the cache if it exists and hasn't expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let value = self.lookup(key);
        tracing::debug!(hit = value.is_some(), "Cache lookup");

        if let Some(metrics) = &self.metrics {
            metrics.record_cache_access(value.is_some());
        }

        value
    }

    fn lookup(&self, key: &K) -> Option<V> {
        let now = Instant::now();

        if let Ok(cache) = self.cache.read() {
            if let Some(entry) = cache.get(key) {
                if now.duration_since(entry.inserted_at) < self.ttl {
                    return Some(entry.value.clone());
                }
            }
        }

        None
    }

    /// Return the fresh cached value for `key`, or run `fetch`, store its result and
    /// return it.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }

        let value = fetch().await;
        self.insert(key, value.clone());
        value
    }

    /// Like [`get_or_fetch`](Self::get_or_fetch), but only successful results are
    /// stored. An error is handed back to the caller and leaves the cache untouched.
    pub async fn get_or_try_fetch<F, Fut, E>(&self, key: K, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = fetch().await?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Get the number of entries in the cache (including expired ones).
    pub fn len(&self) -> usize {
        if let Ok(cache) = self.cache.read() {
            cache.len()
        } else {
            0
        }
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the TTL duration for this cache.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<K, V> std::fmt::Debug for TimedCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_insert_and_get() {
        let cache = TimedCache::new(60);
        cache.insert("key1", "value1");

        assert_eq!(cache.get(&"key1"), Some("value1"));
        assert_eq!(cache.get(&"key2"), None);
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = TimedCache::new(1); // 1 second TTL
        cache.insert("key1", "value1");

        // Should exist immediately
        assert_eq!(cache.get(&"key1"), Some("value1"));

        // Wait for expiration
        thread::sleep(Duration::from_millis(1100));

        // Expired entries are not served but still occupy a slot
        assert_eq!(cache.get(&"key1"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_ttl_never_serves() {
        let cache = TimedCache::new(0);
        cache.insert("key1", "value1");
        assert_eq!(cache.get(&"key1"), None);
    }

    #[test]
    fn test_update_value() {
        let cache = TimedCache::new(60);
        cache.insert("key1", "value1");
        assert_eq!(cache.get(&"key1"), Some("value1"));

        // Update the value
        cache.insert("key1", "value2");
        assert_eq!(cache.get(&"key1"), Some("value2"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_or_fetch_calls_fetch_once_within_ttl() {
        let cache: TimedCache<String, Vec<u32>> = TimedCache::new(60);
        let calls = AtomicUsize::new(0);
        let counter = &calls;

        let first = tokio_test::block_on(cache.get_or_fetch("k".to_string(), || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![1, 2, 3]
        }));
        let second = tokio_test::block_on(cache.get_or_fetch("k".to_string(), || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![9]
        }));

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_get_or_fetch_refetches_after_expiry() {
        let cache: TimedCache<&str, u32> = TimedCache::new(1);

        let first = tokio_test::block_on(cache.get_or_fetch("k", || async { 1 }));
        thread::sleep(Duration::from_millis(1100));
        let second = tokio_test::block_on(cache.get_or_fetch("k", || async { 2 }));

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(cache.get(&"k"), Some(2));
    }

    #[test]
    fn test_get_or_try_fetch_does_not_store_errors() {
        let cache: TimedCache<&str, u32> = TimedCache::new(60);

        let failed: Result<u32, &str> =
            tokio_test::block_on(cache.get_or_try_fetch("k", || async { Err("no data") }));
        assert_eq!(failed, Err("no data"));
        assert!(cache.is_empty());

        let ok: Result<u32, &str> =
            tokio_test::block_on(cache.get_or_try_fetch("k", || async { Ok(7) }));
        assert_eq!(ok, Ok(7));

        let cached: Result<u32, &str> =
            tokio_test::block_on(cache.get_or_try_fetch("k", || async { Err("unused") }));
        assert_eq!(cached, Ok(7));
    }

    #[test]
    fn test_lookups_are_counted() {
        let metrics = Metrics::new();
        let cache = TimedCache::new(60).with_metrics(metrics.clone());

        assert_eq!(cache.get(&"key1"), None);
        cache.insert("key1", "value1");
        assert_eq!(cache.get(&"key1"), Some("value1"));
        assert_eq!(cache.get(&"key1"), Some("value1"));

        assert_eq!(metrics.cache_misses_total(), 1);
        assert_eq!(metrics.cache_hits_total(), 2);
    }

    #[test]
    fn test_clone_cache() {
        let cache1 = TimedCache::new(60);
        cache1.insert("key1", "value1");

        // Clone shares the same underlying cache
        let cache2 = cache1.clone();
        assert_eq!(cache2.get(&"key1"), Some("value1"));

        // Updates are visible in both
        cache2.insert("key2", "value2");
        assert_eq!(cache1.get(&"key2"), Some("value2"));
    }

    #[test]
    fn test_concurrent_access() {
        let cache = TimedCache::new(60);
        let cache_clone = cache.clone();

        let handle = thread::spawn(move || {
            for i in 0..100 {
                cache_clone.insert(format!("key{}", i), format!("value{}", i));
            }
        });

        for i in 100..200 {
            cache.insert(format!("key{}", i), format!("value{}", i));
        }

        handle.join().unwrap();

        assert_eq!(cache.len(), 200);
    }

    #[test]
    fn test_debug_format() {
        let cache = TimedCache::new(300);
        cache.insert("key1", "value1");

        let debug_str = format!("{:?}", cache);
        assert!(debug_str.contains("TimedCache"));
        assert!(debug_str.contains("ttl"));
        assert_eq!(cache.ttl(), Duration::from_secs(300));
    }
}
