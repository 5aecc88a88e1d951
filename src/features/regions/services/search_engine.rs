use std::sync::Arc;

use crate::features::regions::models::Region;
use crate::features::regions::services::region_index::RegionIndex;
use crate::features::regions::services::search_cache::SearchCache;
use crate::shared::constants::MIN_QUERY_CHARS;

/// Case-insensitive substring search over region names.
///
/// `autocomplete` always scans; `search` memoizes through the owned
/// [`SearchCache`].
#[derive(Debug)]
pub struct SearchEngine {
    index: Arc<RegionIndex>,
    cache: SearchCache,
}

impl SearchEngine {
    pub fn new(index: Arc<RegionIndex>) -> Self {
        Self::with_cache(index, SearchCache::new())
    }

    pub fn with_cache(index: Arc<RegionIndex>, cache: SearchCache) -> Self {
        Self { index, cache }
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// Up to `limit` regions whose name contains `query`, ignoring case, in
    /// collection order.
    ///
    /// Queries shorter than two characters and a zero limit return nothing
    /// without scanning.
    pub fn autocomplete(&self, query: &str, limit: usize) -> Vec<Region> {
        if limit == 0 || query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let folded = query.to_lowercase();
        self.index.name_matches(&folded, limit).cloned().collect()
    }

    /// Memoized [`autocomplete`](Self::autocomplete).
    ///
    /// An empty query returns immediately and is never cached.
    pub fn search(&self, query: &str, limit: usize) -> Arc<[Region]> {
        if query.is_empty() {
            return Arc::from(Vec::new());
        }

        self.cache
            .get_or_insert_with(query, limit, || self.autocomplete(query, limit))
    }

    /// Empty the cache; later searches recompute.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
