//! Per-operation counters for the cache, compiled in only with the
//! `metrics` feature.
//!
//! Recording is split from consumption: the cache writes counters inline on
//! each operation, and callers read them through
//! [`metrics_snapshot`](crate::cache::BoundedCache::metrics_snapshot) or the
//! [`MetricsSnapshotProvider`] trait. Snapshots are plain `Copy` structs so
//! bench and test code can diff them freely.
//!
//! Counters touched on `&self` paths (`peek`, `peek_lru`, `recency_rank`)
//! live in [`MetricsCell`]s. These use `Cell` interior mutability and carry
//! no synchronization of their own, matching the cache's single-owner model:
//! with `metrics` enabled the cache is not `Sync`, and shared use goes
//! through the caller's lock like every other operation.

use std::cell::Cell;

/// Counter cell for metrics recorded through `&self`.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }

    #[inline]
    pub fn add(&self, n: u64) {
        self.0.set(self.0.get() + n);
    }
}

/// Operation counters maintained by [`BoundedCache`](crate::cache::BoundedCache).
#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub clear_calls: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
    pub peek_lru_calls: MetricsCell,
    pub peek_lru_found: MetricsCell,
    pub recency_rank_calls: MetricsCell,
    pub recency_rank_found: MetricsCell,
    pub recency_rank_scan_steps: MetricsCell,
}

impl CacheMetrics {
    #[inline]
    pub fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    #[inline]
    pub fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    #[inline]
    pub fn record_insert_update(&mut self) {
        self.insert_calls += 1;
        self.insert_updates += 1;
    }

    #[inline]
    pub fn record_insert_new(&mut self) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }

    #[inline]
    pub fn record_eviction(&mut self) {
        self.evict_calls += 1;
        self.evicted_entries += 1;
    }

    #[inline]
    pub fn record_remove(&mut self, found: bool) {
        self.remove_calls += 1;
        if found {
            self.remove_found += 1;
        }
    }

    #[inline]
    pub fn record_pop_lru(&mut self, found: bool) {
        self.pop_lru_calls += 1;
        if found {
            self.pop_lru_found += 1;
        }
    }

    #[inline]
    pub fn record_touch(&mut self, found: bool) {
        self.touch_calls += 1;
        if found {
            self.touch_found += 1;
        }
    }

    #[inline]
    pub fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

/// Point-in-time copy of [`CacheMetrics`] plus size gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evict_calls: u64,
    pub evicted_entries: u64,

    pub remove_calls: u64,
    pub remove_found: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub clear_calls: u64,

    pub peek_calls: u64,
    pub peek_found: u64,
    pub peek_lru_calls: u64,
    pub peek_lru_found: u64,
    pub recency_rank_calls: u64,
    pub recency_rank_found: u64,
    pub recency_rank_scan_steps: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

/// Read-side access to a metrics snapshot, decoupled from the recorder.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
