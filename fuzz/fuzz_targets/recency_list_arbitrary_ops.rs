#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::RecencyList;

// Fuzz arbitrary operation sequences on RecencyList
//
// Tests random sequences of push_front, pop_back, move_to_front, remove and
// clear, including operations on handles that were already removed.
fuzz_target!(|data: &[u8]| {
    let mut list: RecencyList<u8> = RecencyList::new();
    let mut all_ids = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 5;
        let arg = pair[1];

        match op {
            0 => {
                // push_front
                let id = list.push_front(arg);
                all_ids.push(id);
                assert_eq!(list.front(), Some(&arg));
                assert_eq!(list.front_id(), Some(id));
            },
            1 => {
                // pop_back
                let old_len = list.len();
                let expected = list.back().copied();
                assert_eq!(list.pop_back(), expected);
                assert_eq!(list.len(), old_len.saturating_sub(1));
            },
            2 => {
                // move_to_front
                if let Some(&id) = all_ids.get(usize::from(arg) % all_ids.len().max(1)) {
                    let live = list.contains(id);
                    assert_eq!(list.move_to_front(id), live);
                    if live {
                        assert_eq!(list.front_id(), Some(id));
                    }
                }
            },
            3 => {
                // remove
                if let Some(&id) = all_ids.get(usize::from(arg) % all_ids.len().max(1)) {
                    let live = list.contains(id);
                    assert_eq!(list.remove(id).is_some(), live);
                    assert!(!list.contains(id));
                }
            },
            _ => {
                list.clear();
                all_ids.clear();
                assert!(list.is_empty());
            },
        }

        assert_eq!(list.iter().count(), list.len());
        if let Err(err) = list.check_invariants() {
            panic!("list invariant violated: {err}");
        }
    }
});
