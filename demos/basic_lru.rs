use lrukit::prelude::*;

fn main() {
    let mut cache: LruCache<u32, String> = LruCache::new(2);

    cache.store(1, "alpha".to_string());
    cache.store(2, "beta".to_string());

    if let Ok(value) = cache.get(&1) {
        println!("hit 1: {value}");
    }

    cache.store(3, "gamma".to_string());

    println!("contains 2? {}", cache.contains(&2));
    match cache.get(&2) {
        Ok(value) => println!("hit 2: {value}"),
        Err(err) => println!("miss 2: {err}"),
    }
}

// Expected output:
// hit 1: alpha
// contains 2? false
// miss 2: key not found in cache
//
// Explanation: capacity=2; after get(&1), key 1 is MRU and key 2 is LRU.
// Storing key 3 evicts key 2.
