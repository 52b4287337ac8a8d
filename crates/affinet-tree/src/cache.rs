//! Memoized traversal results.
//!
//! Inputs are immutable for a given snapshot content, so a result keyed by
//! `(content_hash, root, budget)` never goes stale. Sessions showing the same
//! snapshot share entries.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use affinet_core::config::SessionConfig;
use affinet_core::MemberId;

use crate::traversal::{TraversalBudget, TraversalResult};

/// Cache key for one bounded walk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubtreeKey {
    pub content_hash: Arc<str>,
    pub root: MemberId,
    pub budget: TraversalBudget,
}

/// A looked-up or freshly computed traversal.
#[derive(Debug, Clone)]
pub struct CachedTraversal {
    pub result: Arc<TraversalResult>,
    pub hit: bool,
}

/// Bounded, idle-expiring traversal cache.
#[derive(Clone)]
pub struct SubtreeCache {
    cache: Cache<SubtreeKey, Arc<TraversalResult>>,
}

impl SubtreeCache {
    pub fn new(max_entries: u64, idle: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(idle)
            .build();
        Self { cache }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_idle_secs),
        )
    }

    pub fn get(&self, key: &SubtreeKey) -> Option<Arc<TraversalResult>> {
        self.cache.get(key)
    }

    /// Return the cached result for `key`, computing and storing it on a miss.
    pub fn get_or_compute(
        &self,
        key: SubtreeKey,
        compute: impl FnOnce() -> TraversalResult,
    ) -> CachedTraversal {
        if let Some(result) = self.cache.get(&key) {
            return CachedTraversal { result, hit: true };
        }
        let result = Arc::new(compute());
        self.cache.insert(key, Arc::clone(&result));
        CachedTraversal { result, hit: false }
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for SubtreeCache {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
