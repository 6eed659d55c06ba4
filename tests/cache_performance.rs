// ==============================================
// CACHE PERFORMANCE TESTS (integration)
// ==============================================
//
// Smoke checks that the O(1) paths stay in constant-time territory. Bounds
// are deliberately loose so they hold on slow CI machines; use the criterion
// benches for real numbers.

use std::time::{Duration, Instant};

use boundedcache::cache::BoundedCache;
use boundedcache::traits::{CoreCache, RecencyCache};

/// Runs `op` for `rounds` iterations and returns the mean wall-clock cost
/// of one iteration. The loop index is passed through so each round can
/// vary its key.
fn avg_latency(rounds: u32, mut op: impl FnMut(usize)) -> Duration {
    let start = Instant::now();
    for i in 0..rounds as usize {
        op(i);
    }
    start.elapsed() / rounds
}

fn filled(capacity: usize) -> BoundedCache<usize, usize> {
    let mut cache = BoundedCache::new(capacity).unwrap();
    for i in 0..capacity {
        cache.insert(i, i * 10);
    }
    cache
}

#[test]
fn get_latency_stays_flat() {
    let mut cache = filled(1000);

    let avg = avg_latency(10_000, |i| {
        cache.get(&(i % 1000));
    });

    println!("per-get: {:?}", avg);
    assert!(avg < Duration::from_micros(50), "get too slow: {:?}", avg);
}

#[test]
fn insert_with_eviction_latency_stays_flat() {
    let mut cache = filled(1000);

    let avg = avg_latency(10_000, |i| {
        cache.insert(1000 + i, i);
    });

    println!("per-evicting-insert: {:?}", avg);
    assert!(
        avg < Duration::from_micros(50),
        "evicting insert too slow: {:?}",
        avg
    );
}

#[test]
fn touch_latency_stays_flat() {
    let mut cache = filled(1000);

    let avg = avg_latency(10_000, |i| {
        cache.touch(&(i % 1000));
    });

    println!("per-touch: {:?}", avg);
    assert!(avg < Duration::from_micros(50), "touch too slow: {:?}", avg);
}

#[test]
fn hit_latency_does_not_grow_with_cache_size() {
    // O(1) lookups: a 100x larger cache must not cost anywhere near 100x
    // per get. Allow a wide factor for hash-table cache effects.
    let sizes = [1_000usize, 100_000];
    let mut averages = Vec::new();

    for &size in &sizes {
        let mut cache = filled(size);
        averages.push(avg_latency(10_000, |i| {
            cache.get(&(i % size));
        }));
    }

    println!("per-get at sizes {:?}: {:?}", sizes, averages);
    assert!(
        averages[1] < averages[0] * 20 + Duration::from_micros(10),
        "get latency grew superlinearly: {:?} -> {:?}",
        averages[0],
        averages[1]
    );
}
