use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::features::regions::models::Region;

/// Cache key: the query exactly as the caller passed it, plus the limit.
///
/// The query is not case-folded, so `"Jakarta"` and `"jakarta"` occupy
/// separate entries even though they produce the same results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    query: String,
    limit: usize,
}

/// Unbounded memo of search results keyed by `(query, limit)`.
///
/// Entries live until [`SearchCache::clear`]; there is no eviction. Safe to
/// share between threads: lookups take a read lock, inserts and clears a
/// write lock.
#[derive(Debug, Default)]
pub struct SearchCache {
    entries: RwLock<HashMap<CacheKey, Arc<[Region]>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached results for `(query, limit)`, computing and storing them on a miss.
    ///
    /// `compute` runs without holding the lock. Two threads missing on the
    /// same key may both compute; the first insert wins and both get equal
    /// results.
    pub fn get_or_insert_with<F>(&self, query: &str, limit: usize, compute: F) -> Arc<[Region]>
    where
        F: FnOnce() -> Vec<Region>,
    {
        let key = CacheKey {
            query: query.to_string(),
            limit,
        };

        if let Some(results) = self.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(query, limit, "Search cache hit");
            return Arc::clone(results);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(query, limit, "Search cache miss");

        let computed: Arc<[Region]> = compute().into();
        let mut entries = self.write();
        Arc::clone(entries.entry(key).or_insert(computed))
    }

    /// Drop every entry. Returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut entries = self.write();
        let evicted = entries.len();
        entries.clear();
        debug!(evicted, "Search cache cleared");
        evicted
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn contains(&self, query: &str, limit: usize) -> bool {
        self.read().contains_key(&CacheKey {
            query: query.to_string(),
            limit,
        })
    }

    /// Lookups answered from the cache since construction
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that had to compute since construction
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    // A panic while holding the lock cannot leave a half-written entry behind,
    // so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<CacheKey, Arc<[Region]>>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<CacheKey, Arc<[Region]>>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}
