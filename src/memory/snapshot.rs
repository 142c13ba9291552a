/*!
 * Memory Snapshot
 * Coalesced read-only view of the block array for reporting
 */

use super::allocator::BlockAllocator;
use super::types::{MemoryRun, RunState};

impl BlockAllocator {
    /// Coalesce the block array into maximal runs of uniform state
    ///
    /// Runs are ordered by start block and cover the whole pool. Reporting
    /// only; allocation never consults this view.
    pub fn snapshot(&self) -> Vec<MemoryRun> {
        let mut runs: Vec<MemoryRun> = Vec::new();

        for (index, block) in self.blocks.iter().enumerate() {
            let state = match block.owner {
                Some(pid) => RunState::UsedBy(pid),
                None => RunState::Free,
            };

            match runs.last_mut() {
                Some(run) if run.state == state => run.end = index,
                _ => runs.push(MemoryRun {
                    start: index,
                    end: index,
                    state,
                }),
            }
        }

        runs
    }
}
