//! Engine counters. Lock-free, shared by every session of a manager.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use affinet_core::AnomalyTally;

/// Monotonic counters for snapshot application and traversal caching.
#[derive(Debug, Default)]
pub struct TreeMetrics {
    snapshots_applied: AtomicU64,
    stale_discarded: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    anomalies: AtomicU64,
}

/// Point-in-time copy of [`TreeMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub snapshots_applied: u64,
    pub stale_discarded: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub anomalies: u64,
}

impl MetricsSnapshot {
    /// Cache hit rate in [0.0, 1.0]; 0.0 before any lookup.
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

impl TreeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_snapshot_applied(&self, anomalies: &AnomalyTally) {
        self.snapshots_applied.fetch_add(1, Ordering::Relaxed);
        self.anomalies
            .fetch_add(anomalies.total() as u64, Ordering::Relaxed);
    }

    pub fn record_stale_discarded(&self) {
        self.stale_discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            snapshots_applied: self.snapshots_applied.load(Ordering::Relaxed),
            stale_discarded: self.stale_discarded.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            anomalies: self.anomalies.load(Ordering::Relaxed),
        }
    }
}
