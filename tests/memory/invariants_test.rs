/*!
 * Allocator Invariant Tests
 * Property checks for disjointness, contiguity and conservation
 */

use proptest::prelude::*;
use rr_memsim::{BlockAllocator, Pid, RunState};
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Allocate { pid: Pid, size: usize },
    Release { pid: Pid },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..8, 1usize..12).prop_map(|(pid, size)| Op::Allocate { pid, size }),
        (0u32..8).prop_map(|pid| Op::Release { pid }),
    ]
}

proptest! {
    #[test]
    fn prop_allocator_invariants(ops in proptest::collection::vec(op(), 1..80)) {
        const POOL: usize = 32;
        let mut mem = BlockAllocator::new(POOL);
        let mut held: HashMap<Pid, usize> = HashMap::new();

        for op in ops {
            match op {
                Op::Allocate { pid, size } => {
                    let was_free = !held.contains_key(&pid);
                    let largest = mem.largest_free_run();
                    match mem.allocate(size, pid) {
                        Ok(region) => {
                            prop_assert!(was_free);
                            prop_assert!(size <= largest);
                            prop_assert_eq!(region.len, size);
                            held.insert(pid, size);
                        }
                        Err(_) => prop_assert!(!was_free || size > largest),
                    }
                }
                Op::Release { pid } => {
                    let freed = mem.release(pid);
                    let expected = held.remove(&pid).unwrap_or(0);
                    prop_assert_eq!(freed, expected);
                }
            }

            let runs = mem.snapshot();

            // Conservation: runs tile the pool exactly
            prop_assert_eq!(runs.iter().map(|r| r.len()).sum::<usize>(), POOL);
            for pair in runs.windows(2) {
                prop_assert_eq!(pair[0].end + 1, pair[1].start);
                prop_assert_ne!(pair[0].state, pair[1].state);
            }

            // Contiguity and disjointness: one run per owner, of the requested size
            let mut seen: HashMap<Pid, usize> = HashMap::new();
            for run in &runs {
                if let RunState::UsedBy(pid) = run.state {
                    prop_assert!(seen.insert(pid, run.len()).is_none());
                }
            }
            prop_assert_eq!(seen, held.clone());
        }
    }
}
