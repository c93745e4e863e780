#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::error::NotFoundError;
use lrukit::policy::lru::LruCache;

// Fuzz arbitrary operation sequences on LruCache
//
// The first byte picks the capacity; each following pair of bytes is
// (op, key). Invariants are checked after every operation.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, ops)) = data.split_first() else {
        return;
    };

    let capacity = usize::from(cap_byte % 16);
    let mut cache: LruCache<u8, u32> = LruCache::new(capacity);

    for (step, pair) in ops.chunks_exact(2).enumerate() {
        let op = pair[0] % 9;
        let key = pair[1] % 32;
        let value = step as u32;

        match op {
            0 | 1 => {
                // store
                let existed = cache.contains(&key);
                let len_before = cache.len();
                let previous = cache.store(key, value);
                assert_eq!(previous.is_some(), existed);

                if capacity == 0 {
                    assert!(cache.is_empty());
                } else {
                    assert_eq!(cache.peek(&key), Some(&value));
                    assert_eq!(cache.recency_rank(&key), Some(0));
                    if existed || len_before < capacity {
                        assert_eq!(cache.len(), len_before + usize::from(!existed));
                    } else {
                        assert_eq!(cache.len(), capacity);
                    }
                }
            },
            2 | 3 => {
                // get
                let expected = cache.peek(&key).copied();
                match cache.get(&key) {
                    Ok(v) => {
                        assert_eq!(Some(*v), expected);
                        assert_eq!(cache.recency_rank(&key), Some(0));
                    },
                    Err(err) => {
                        assert_eq!(err, NotFoundError);
                        assert!(expected.is_none());
                    },
                }
            },
            4 => {
                // touch
                let present = cache.contains(&key);
                assert_eq!(cache.touch(&key), present);
            },
            5 => {
                // remove
                let present = cache.contains(&key);
                assert_eq!(cache.remove(&key).is_some(), present);
                assert!(!cache.contains(&key));
            },
            6 => {
                // pop_lru
                let expected = cache.peek_lru().map(|(k, v)| (*k, *v));
                assert_eq!(cache.pop_lru(), expected);
            },
            7 => {
                // iter
                assert_eq!(cache.iter().count(), cache.len());
            },
            _ => {
                cache.clear();
                assert!(cache.is_empty());
            },
        }

        assert!(cache.len() <= capacity);
        if let Err(err) = cache.check_invariants() {
            panic!("invariant violated at step {step}: {err}");
        }
    }
});
