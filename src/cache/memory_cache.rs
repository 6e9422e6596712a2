//! In-memory cache with TTL (Time To Live) support.
//!
//! Freshness is evaluated per lookup rather than by a background sweeper:
//! an expired entry is removed the next time it is read (lazy expiry), or
//! when `cleanup` is invoked by an external scheduler.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A cache entry with its insertion timestamp.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// A thread-safe key-value cache with time-based expiration.
///
/// Entries are stamped at insertion time and considered fresh while their
/// age does not exceed the effective TTL, which is decided at lookup time
/// (an explicit argument to `get_with_ttl`, or the configured default).
/// The cache is cheap to clone and clones share the same entry map.
///
/// Handlers run on a preemptive multi-threaded runtime, so the cache
/// carries its own lock instead of relying on caller-side exclusion.
#[derive(Clone)]
pub struct MemoryCache<V>
where
    V: Clone,
{
    entries: Arc<RwLock<HashMap<String, CacheEntry<V>>>>,
    default_ttl: Duration,
}

impl<V> MemoryCache<V>
where
    V: Clone,
{
    /// Create a new MemoryCache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            default_ttl,
        }
    }

    /// Insert a value under `key`, stamping the current time.
    ///
    /// Unconditionally overwrites any existing entry for that key and
    /// resets its insertion timestamp.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            inserted_at: Instant::now(),
        };

        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), entry);
        }
    }

    /// Get a value if it exists and is no older than the default TTL.
    pub fn get(&self, key: &str) -> Option<V> {
        self.get_with_ttl(key, self.default_ttl)
    }

    /// Get a value if it exists and is no older than `ttl`.
    ///
    /// Returns `None` if the key is absent or the entry has expired.
    /// An entry is fresh while `age <= ttl`; an expired entry is removed
    /// as a side effect of the failed lookup and is never returned.
    pub fn get_with_ttl(&self, key: &str, ttl: Duration) -> Option<V> {
        let now = Instant::now();
        let mut entries = self.entries.write().ok()?;

        match entries.get(key) {
            Some(entry) if now.duration_since(entry.inserted_at) <= ttl => {
                Some(entry.value.clone())
            }
            Some(_) => {
                // Lazy expiry: drop the stale entry on access.
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Remove a specific key from the cache. No-op if absent.
    pub fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }

    /// Clear all entries from the cache.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Remove every entry older than the default TTL.
    ///
    /// Returns the number of entries removed. Not required for
    /// correctness (`get` never returns stale data), only for proactive
    /// memory reclamation.
    pub fn cleanup(&self) -> usize {
        self.cleanup_with_ttl(self.default_ttl)
    }

    /// Remove every entry older than `ttl`, returning the removed count.
    pub fn cleanup_with_ttl(&self, ttl: Duration) -> usize {
        let now = Instant::now();

        if let Ok(mut entries) = self.entries.write() {
            let before = entries.len();
            entries.retain(|_, entry| now.duration_since(entry.inserted_at) <= ttl);
            before - entries.len()
        } else {
            0
        }
    }

    /// Number of stored entries.
    ///
    /// Stale entries still count until a `get` or `cleanup` removes them;
    /// the count is not filtered by TTL.
    pub fn len(&self) -> usize {
        if let Ok(entries) = self.entries.read() {
            entries.len()
        } else {
            0
        }
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The TTL applied when a lookup does not supply its own.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl<V> std::fmt::Debug for MemoryCache<V>
where
    V: Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("default_ttl", &self.default_ttl)
            .field("entries", &self.len())
            .finish()
    }
}
