//! In-memory metric store.
//!
//! A single flat namespace of `id -> MetricValue` backed by `DashMap`, so
//! concurrent requests touching the same id serialize on the entry's shard
//! lock. `apply` performs its read-modify-write entirely under that lock:
//! two concurrent counter increments can never lose an update and a
//! concurrent `get` can never observe a half-written value.
//!
//! The store is memory-only: created empty at process start, never
//! persisted, and entries are never deleted.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use vitals_core::{Metric, MetricKind, MetricValue, Result, VitalsError};

#[derive(Default)]
pub struct MetricStore {
    metrics: DashMap<String, MetricValue>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self {
            metrics: DashMap::new(),
        }
    }

    /// Parse a raw string value under `kind` and apply it.
    pub fn save_raw(&self, kind: MetricKind, id: &str, raw: &str) -> Result<Metric> {
        let value = MetricValue::parse_raw(kind, raw)?;
        self.apply(id, value)
    }

    /// Apply one write: gauges overwrite, counters accumulate, an unseen id
    /// is seeded with the incoming value.
    ///
    /// A write whose kind differs from the id's stored kind is rejected with
    /// `TypeConflict` instead of silently reinterpreting the stored value.
    /// Returns the post-update stored metric, read under the same entry
    /// lock as the write.
    pub fn apply(&self, id: &str, incoming: MetricValue) -> Result<Metric> {
        match self.metrics.entry(id.to_string()) {
            Entry::Occupied(mut e) => {
                match (e.get_mut(), incoming) {
                    (MetricValue::Gauge(cur), MetricValue::Gauge(v)) => *cur = v,
                    (MetricValue::Counter(total), MetricValue::Counter(d)) => {
                        // wrapping, so a hostile delta cannot abort the process
                        *total = total.wrapping_add(d);
                    }
                    (stored, incoming) => {
                        return Err(VitalsError::TypeConflict {
                            id: id.to_string(),
                            stored: stored.kind().as_str(),
                            requested: incoming.kind().as_str(),
                        });
                    }
                }
                Ok(Metric {
                    id: id.to_string(),
                    value: *e.get(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(incoming);
                Ok(Metric {
                    id: id.to_string(),
                    value: incoming,
                })
            }
        }
    }

    /// Look up a metric; present only if the id exists under exactly the
    /// requested kind.
    pub fn get(&self, kind: MetricKind, id: &str) -> Option<Metric> {
        let entry = self.metrics.get(id)?;
        if entry.kind() != kind {
            return None;
        }
        Some(Metric {
            id: id.to_string(),
            value: *entry,
        })
    }

    /// Point-in-time copy of every stored metric; order is unspecified.
    pub fn snapshot(&self) -> Vec<Metric> {
        self.metrics
            .iter()
            .map(|e| Metric {
                id: e.key().clone(),
                value: *e.value(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn gauge_overwrites() {
        let store = MetricStore::new();
        store.save_raw(MetricKind::Gauge, "cpu", "7513").unwrap();
        store.save_raw(MetricKind::Gauge, "cpu", "42").unwrap();
        let m = store.get(MetricKind::Gauge, "cpu").unwrap();
        assert_eq!(m.value, MetricValue::Gauge(42.0));
    }

    #[test]
    fn counter_accumulates() {
        let store = MetricStore::new();
        store.save_raw(MetricKind::Counter, "cpu", "8").unwrap();
        store.save_raw(MetricKind::Counter, "cpu", "8").unwrap();
        let m = store.get(MetricKind::Counter, "cpu").unwrap();
        assert_eq!(m.value, MetricValue::Counter(16));
    }

    #[test]
    fn first_counter_write_seeds_total() {
        let store = MetricStore::new();
        let m = store.apply("hits", MetricValue::Counter(-5)).unwrap();
        assert_eq!(m.value, MetricValue::Counter(-5));
    }

    #[test]
    fn kind_mismatch_lookup_misses() {
        let store = MetricStore::new();
        store.apply("x", MetricValue::Gauge(1.0)).unwrap();
        assert!(store.get(MetricKind::Counter, "x").is_none());
        assert!(store.get(MetricKind::Gauge, "x").is_some());
    }

    #[test]
    fn conflicting_kind_write_is_rejected() {
        let store = MetricStore::new();
        store.apply("x", MetricValue::Gauge(1.0)).unwrap();
        let err = store.apply("x", MetricValue::Counter(1)).unwrap_err();
        assert_eq!(err.client_code().as_str(), "TYPE_CONFLICT");
        // stored value untouched
        assert_eq!(
            store.get(MetricKind::Gauge, "x").unwrap().value,
            MetricValue::Gauge(1.0)
        );
    }

    #[test]
    fn invalid_raw_values_do_not_touch_the_store() {
        let store = MetricStore::new();
        assert!(store.save_raw(MetricKind::Gauge, "g", "none").is_err());
        assert!(store.save_raw(MetricKind::Counter, "c", "1.5").is_err());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn apply_returns_post_update_state() {
        let store = MetricStore::new();
        store.apply("n", MetricValue::Counter(3)).unwrap();
        let m = store.apply("n", MetricValue::Counter(4)).unwrap();
        assert_eq!(m.value, MetricValue::Counter(7));
    }

    #[test]
    fn snapshot_is_a_copy() {
        let store = MetricStore::new();
        store.apply("a", MetricValue::Gauge(1.0)).unwrap();
        let snap = store.snapshot();
        store.apply("a", MetricValue::Gauge(2.0)).unwrap();
        assert_eq!(snap[0].value, MetricValue::Gauge(1.0));
    }

    #[test]
    fn concurrent_counter_increments_never_lose_updates() {
        const WRITERS: usize = 8;
        const INCREMENTS: i64 = 1000;

        let store = Arc::new(MetricStore::new());
        let handles: Vec<_> = (0..WRITERS)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..INCREMENTS {
                        store.apply("hits", MetricValue::Counter(1)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let m = store.get(MetricKind::Counter, "hits").unwrap();
        assert_eq!(m.value, MetricValue::Counter(WRITERS as i64 * INCREMENTS));
    }
}
