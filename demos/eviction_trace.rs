use boundedcache::cache::BoundedCache;
use boundedcache::traits::{CoreCache, RecencyCache};

fn print_order(step: &str, cache: &BoundedCache<u32, u32>) {
    let keys: Vec<u32> = cache.iter().map(|(key, _)| *key).collect();
    println!("{:<12} order (MRU..LRU): {:?}", step, keys);
}

fn main() {
    let mut cache: BoundedCache<u32, u32> = BoundedCache::new(2).expect("capacity is nonzero");

    cache.insert(1, 1);
    cache.insert(2, 2);
    print_order("insert 1,2", &cache);

    cache.get(&1);
    print_order("get 1", &cache);

    cache.insert(3, 3);
    print_order("insert 3", &cache);
    println!("get 2 -> {:?}", cache.get(&2));

    cache.insert(4, 4);
    print_order("insert 4", &cache);

    cache.get(&3);
    print_order("get 3", &cache);
    println!("eviction candidate: {:?}", cache.peek_lru());
}

// Expected output:
// insert 1,2   order (MRU..LRU): [2, 1]
// get 1        order (MRU..LRU): [1, 2]
// insert 3     order (MRU..LRU): [3, 1]
// get 2 -> None
// insert 4     order (MRU..LRU): [4, 3]
// get 3        order (MRU..LRU): [3, 4]
// eviction candidate: Some((4, 4))
