/*!
 * First-Fit Allocation Tests
 * Placement, fragmentation and release behavior of the block allocator
 */

use pretty_assertions::assert_eq;
use rr_memsim::{BlockAllocator, MemoryError, MemoryRun, Region, RunState};

#[test]
fn test_first_fit_after_used_prefix() {
    let mut mem = BlockAllocator::new(10);
    mem.allocate(4, 0).unwrap(); // blocks 0-3

    let region = mem.allocate(3, 1).unwrap();
    assert_eq!(region, Region { start: 4, len: 3 });
}

#[test]
fn test_first_fit_ignores_later_better_fit() {
    let mut mem = BlockAllocator::new(12);
    mem.allocate(5, 0).unwrap(); // 0-4
    mem.allocate(1, 1).unwrap(); // 5
    mem.allocate(3, 2).unwrap(); // 6-8
    mem.release(0); // hole of 5 at 0-4, hole of 3 at 9-11

    // Best fit would pick 9-11; first fit takes the leftmost hole
    let region = mem.allocate(3, 3).unwrap();
    assert_eq!(region.start, 0);
}

#[test]
fn test_fragmented_pool_rejects_large_request() {
    let mut mem = BlockAllocator::new(10);
    for pid in 0..5 {
        mem.allocate(2, pid).unwrap();
    }
    mem.release(0);
    mem.release(2);
    mem.release(4);

    assert_eq!(mem.free_blocks(), 6);
    assert_eq!(
        mem.allocate(3, 9),
        Err(MemoryError::NoContiguousRun {
            requested: 3,
            largest_free_run: 2
        })
    );
}

#[test]
fn test_release_frees_only_owner() {
    let mut mem = BlockAllocator::new(6);
    mem.allocate(2, 0).unwrap();
    mem.allocate(2, 1).unwrap();

    assert_eq!(mem.release(0), 2);
    assert_eq!(
        mem.snapshot(),
        vec![
            MemoryRun { start: 0, end: 1, state: RunState::Free },
            MemoryRun { start: 2, end: 3, state: RunState::UsedBy(1) },
            MemoryRun { start: 4, end: 5, state: RunState::Free },
        ]
    );
}

#[test]
fn test_freed_region_is_reused() {
    let mut mem = BlockAllocator::new(4);
    mem.allocate(4, 0).unwrap();
    assert!(mem.allocate(1, 1).is_err());

    mem.release(0);
    assert_eq!(mem.allocate(4, 1).unwrap(), Region { start: 0, len: 4 });
    assert_eq!(mem.owned_by(1), Some(Region { start: 0, len: 4 }));
    assert_eq!(mem.owned_by(0), None);
}
