use boundedcache::cache::BoundedCache;
use boundedcache::traits::CoreCache;

fn main() {
    let mut resolved: BoundedCache<&str, &str> =
        BoundedCache::new(3).expect("capacity is nonzero");

    resolved.insert("db.internal", "10.0.0.12");
    resolved.insert("api.internal", "10.0.0.40");
    resolved.insert("www.internal", "10.0.0.7");

    if let Some(addr) = resolved.get(&"api.internal") {
        println!("api.internal -> {}", addr);
    }

    // Fourth name; the cache holds three, so one entry has to go.
    resolved.insert("queue.internal", "10.0.0.99");

    println!("db.internal cached? {}", resolved.contains(&"db.internal"));
    println!("www.internal cached? {}", resolved.contains(&"www.internal"));
}

// Expected output:
// api.internal -> 10.0.0.40
// db.internal cached? false
// www.internal cached? true
//
// db.internal is the only name never read after insertion, so it is the
// least recently used entry when the fourth name arrives and is the one
// dropped.
