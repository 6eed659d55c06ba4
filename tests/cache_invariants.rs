// ==============================================
// CACHE INVARIANT TESTS (integration)
// ==============================================
//
// Cross-module behavioral tests: the documented eviction scenarios, the
// capacity bound under mixed workloads, and a step-by-step comparison
// against a naive reference model.

use boundedcache::prelude::*;

// ==============================================
// Documented Scenarios
// ==============================================

mod documented_scenarios {
    use super::*;

    fn keys_mru_to_lru(cache: &BoundedCache<i32, i32>) -> Vec<i32> {
        cache.iter().map(|(key, _)| *key).collect()
    }

    #[test]
    fn get_promotes_and_orders_survivors() {
        let mut cache = BoundedCache::new(2).unwrap();
        cache.insert(1, 1);
        cache.insert(2, 2);

        assert_eq!(cache.get(&1), Some(&1));
        assert_eq!(keys_mru_to_lru(&cache), vec![1, 2]);
    }

    #[test]
    fn overflow_evicts_current_lru() {
        let mut cache = BoundedCache::new(2).unwrap();
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.get(&1);

        cache.insert(3, 3);
        assert!(!cache.contains(&2));
        assert_eq!(keys_mru_to_lru(&cache), vec![3, 1]);
    }

    #[test]
    fn evicted_key_stays_gone_until_reinserted() {
        let mut cache = BoundedCache::new(2).unwrap();
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.get(&1);
        cache.insert(3, 3);

        assert_eq!(cache.get(&2), None);

        cache.insert(4, 4);
        assert!(!cache.contains(&1));
        assert_eq!(cache.get(&3), Some(&3));
        assert_eq!(keys_mru_to_lru(&cache), vec![3, 4]);
    }

    #[test]
    fn idempotent_reinsertion_keeps_one_entry() {
        let mut cache = BoundedCache::new(2).unwrap();
        cache.insert(1, 1);
        cache.insert(2, 2);

        cache.insert(1, 1);
        cache.insert(1, 1);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.peek(&1), Some(&1));
        assert!(cache.contains(&2));
    }
}

// ==============================================
// Construction Errors
// ==============================================

mod construction {
    use super::*;

    #[test]
    fn zero_capacity_never_constructs() {
        let err = BoundedCache::<u64, u64>::new(0).unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn config_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(BoundedCache::<u64, u64>::new(0).unwrap_err());
        assert!(!err.to_string().is_empty());
    }
}

// ==============================================
// Capacity Bound Under Load
// ==============================================

mod capacity_bound {
    use super::*;

    #[test]
    fn size_never_exceeds_capacity() {
        for capacity in [1usize, 2, 3, 7, 16] {
            let mut cache = BoundedCache::new(capacity).unwrap();
            for i in 0..500u64 {
                cache.insert(i % 37, i);
                assert!(cache.len() <= capacity, "capacity {} exceeded", capacity);
                assert!(cache.check_invariants().is_ok());
            }
        }
    }

    #[test]
    fn trait_object_style_access_preserves_bound() {
        fn churn<C: RecencyCache<u64, u64>>(cache: &mut C) {
            for i in 0..100 {
                cache.insert(i, i);
                cache.touch(&(i / 2));
                if i % 7 == 0 {
                    cache.pop_lru();
                }
            }
        }

        let mut cache = BoundedCache::new(10).unwrap();
        churn(&mut cache);
        assert!(cache.len() <= 10);
        assert!(cache.check_invariants().is_ok());
    }
}

// ==============================================
// Model Comparison
// ==============================================
//
// Drives the cache and a naive Vec-based reference model with the same
// deterministic operation stream and requires identical observable state
// after every step.

mod model_comparison {
    use super::*;

    /// Reference LRU: a Vec ordered MRU-first. Every operation is O(n),
    /// which is fine for a few thousand steps.
    struct ModelCache {
        capacity: usize,
        entries: Vec<(u64, u64)>,
    }

    impl ModelCache {
        fn new(capacity: usize) -> Self {
            Self {
                capacity,
                entries: Vec::new(),
            }
        }

        fn insert(&mut self, key: u64, value: u64) -> Option<u64> {
            if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
                let (_, previous) = self.entries.remove(pos);
                self.entries.insert(0, (key, value));
                return Some(previous);
            }
            if self.entries.len() == self.capacity {
                self.entries.pop();
            }
            self.entries.insert(0, (key, value));
            None
        }

        fn get(&mut self, key: u64) -> Option<u64> {
            let pos = self.entries.iter().position(|(k, _)| *k == key)?;
            let entry = self.entries.remove(pos);
            let value = entry.1;
            self.entries.insert(0, entry);
            Some(value)
        }

        fn remove(&mut self, key: u64) -> Option<u64> {
            let pos = self.entries.iter().position(|(k, _)| *k == key)?;
            Some(self.entries.remove(pos).1)
        }

        fn pop_lru(&mut self) -> Option<(u64, u64)> {
            self.entries.pop()
        }

        fn touch(&mut self, key: u64) -> bool {
            match self.entries.iter().position(|(k, _)| *k == key) {
                Some(pos) => {
                    let entry = self.entries.remove(pos);
                    self.entries.insert(0, entry);
                    true
                },
                None => false,
            }
        }

        fn keys_mru_to_lru(&self) -> Vec<u64> {
            self.entries.iter().map(|(k, _)| *k).collect()
        }
    }

    /// Deterministic mixed-ratio operation stream from a multiplicative LCG.
    fn lcg_stream(seed: u64) -> impl Iterator<Item = u64> {
        let mut state = seed.max(1);
        std::iter::repeat_with(move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            state >> 33
        })
    }

    fn run_model_comparison(capacity: usize, key_space: u64, steps: usize, seed: u64) {
        let mut cache = BoundedCache::new(capacity).unwrap();
        let mut model = ModelCache::new(capacity);
        let mut rng = lcg_stream(seed);

        for step in 0..steps {
            let roll = rng.next().unwrap();
            let key = roll % key_space;
            match roll % 10 {
                // Insert-heavy mix: evictions are the interesting path.
                0..=4 => {
                    let value = roll / key_space;
                    assert_eq!(
                        cache.insert(key, value),
                        model.insert(key, value),
                        "insert mismatch at step {}",
                        step
                    );
                },
                5..=7 => {
                    assert_eq!(
                        cache.get(&key).copied(),
                        model.get(key),
                        "get mismatch at step {}",
                        step
                    );
                },
                8 => {
                    assert_eq!(
                        cache.remove(&key),
                        model.remove(key),
                        "remove mismatch at step {}",
                        step
                    );
                },
                _ => {
                    assert_eq!(cache.touch(&key), model.touch(key), "touch mismatch at step {}", step);
                },
            }

            let cache_keys: Vec<u64> = cache.iter().map(|(k, _)| *k).collect();
            assert_eq!(
                cache_keys,
                model.keys_mru_to_lru(),
                "recency order diverged at step {}",
                step
            );
            assert!(cache.check_invariants().is_ok());
        }
    }

    #[test]
    fn matches_model_small_cache_high_contention() {
        run_model_comparison(4, 8, 3_000, 0x5eed);
    }

    #[test]
    fn matches_model_medium_cache() {
        run_model_comparison(32, 100, 3_000, 42);
    }

    #[test]
    fn matches_model_capacity_one() {
        run_model_comparison(1, 4, 1_000, 7);
    }

    #[test]
    fn pop_lru_agrees_with_model() {
        let mut cache = BoundedCache::new(8).unwrap();
        let mut model = ModelCache::new(8);
        let mut rng = lcg_stream(99);

        for _ in 0..200 {
            let roll = rng.next().unwrap();
            let key = roll % 12;
            cache.insert(key, roll);
            model.insert(key, roll);
            if roll % 3 == 0 {
                assert_eq!(cache.pop_lru(), model.pop_lru());
            }
        }
        assert!(cache.check_invariants().is_ok());
    }
}

// ==============================================
// Miss Transparency
// ==============================================

mod miss_transparency {
    use super::*;

    #[test]
    fn misses_never_change_size_or_order() {
        let mut cache = BoundedCache::new(3).unwrap();
        cache.insert(1, 10);
        cache.insert(2, 20);
        cache.insert(3, 30);

        let order_before: Vec<i32> = cache.iter().map(|(k, _)| *k).collect();

        assert_eq!(cache.get(&99), None);
        assert_eq!(cache.peek(&99), None);
        assert_eq!(cache.remove(&99), None);
        assert!(!cache.touch(&99));
        assert_eq!(cache.recency_rank(&99), None);

        let order_after: Vec<i32> = cache.iter().map(|(k, _)| *k).collect();
        assert_eq!(order_before, order_after);
        assert_eq!(cache.len(), 3);
    }
}
