//! Model-based checks of the handle contract for pools and arenas.

use std::collections::HashSet;

use hearth_core::{Arena, Handle, TypedPool};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Allocate(u32),
    /// Free the n-th handle ever issued (modulo the number issued).
    Free(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u32>().prop_map(Op::Allocate),
        2 => any::<usize>().prop_map(Op::Free),
    ]
}

proptest! {
    #[test]
    fn get_resolves_only_latest_unfreed_allocation(ops in prop::collection::vec(arb_op(), 1..300)) {
        let mut pool: TypedPool<u32> = TypedPool::new();
        // (handle, value, live)
        let mut issued: Vec<(Handle, u32, bool)> = Vec::new();

        for op in ops {
            match op {
                Op::Allocate(value) => {
                    let handle = pool.allocate(value);
                    prop_assert!(issued.iter().all(|(old, _, _)| *old != handle));
                    issued.push((handle, value, true));
                }
                Op::Free(pick) if !issued.is_empty() => {
                    let idx = pick % issued.len();
                    let entry = &mut issued[idx];
                    let freed = pool.free(entry.0);
                    prop_assert_eq!(freed, entry.2);
                    entry.2 = false;
                }
                Op::Free(_) => {}
            }

            for (handle, value, live) in &issued {
                if *live {
                    prop_assert_eq!(pool.get(*handle), Some(value));
                } else {
                    prop_assert_eq!(pool.get(*handle), None);
                }
            }
            let live_count = issued.iter().filter(|(_, _, live)| *live).count();
            prop_assert_eq!(pool.active_count(), live_count);
        }
    }

    #[test]
    fn reuse_bumps_generation_by_exactly_one(frees in prop::collection::vec(0usize..16, 1..64)) {
        let mut pool: TypedPool<u8> = TypedPool::new();
        let mut handles: Vec<Handle> = (0..16).map(|_| pool.allocate(0)).collect();

        for slot in frees {
            let old = handles[slot];
            pool.free(old);
            let new = pool.allocate(1);
            prop_assert_eq!(new.index(), old.index());
            prop_assert_eq!(new.generation(), old.generation() + 1);
            handles[slot] = new;
        }
    }

    #[test]
    fn arena_spans_are_disjoint(kinds in prop::collection::vec(0u8..5, 1..200)) {
        let mut arena = Arena::new(8 * 1024);
        for kind in kinds {
            match kind {
                0 => { arena.alloc(1u8); }
                1 => { arena.alloc(2u16); }
                2 => { arena.alloc(3u64); }
                3 => { arena.alloc([4u8; 5]); }
                _ => { arena.alloc(String::from("ration")); }
            }
        }

        let mut spans: Vec<_> = arena.allocations().filter(|a| a.size > 0).collect();
        spans.sort_by_key(|a| a.offset);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].offset);
        }
        let offsets: HashSet<usize> = spans.iter().map(|a| a.offset).collect();
        prop_assert_eq!(offsets.len(), spans.len());
    }
}

#[test]
fn lifo_reuse_after_freeing_one_two_three() {
    let mut pool: TypedPool<i32> = TypedPool::new();
    let handles: Vec<Handle> = (0..5).map(|i| pool.allocate(i)).collect();

    for &h in &handles[1..4] {
        pool.free(h);
    }

    let a = pool.allocate(30);
    let b = pool.allocate(20);
    assert_eq!((a.index(), a.generation()), (3, 1));
    assert_eq!((b.index(), b.generation()), (2, 1));
    assert_eq!(pool.get(handles[1]), None);
    assert_eq!(pool.free_count(), 1);
}
