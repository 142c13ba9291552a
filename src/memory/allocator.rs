/*!
 * Block Allocator Implementation
 * First-fit contiguous allocation over a fixed array of unit blocks
 */

use super::types::{Block, MemoryError, MemoryResult, MemoryStats, Region};
use crate::core::types::{BlockCount, Pid};
use tracing::debug;

/// Fixed pool of unit blocks
///
/// Allocations never move once placed, so fragmentation is possible and a
/// request may fail even when enough blocks are free in total.
#[derive(Debug, Clone)]
pub struct BlockAllocator {
    pub(super) blocks: Vec<Block>,
}

impl BlockAllocator {
    /// Create a pool of `total_blocks` free blocks
    pub fn new(total_blocks: BlockCount) -> Self {
        Self {
            blocks: vec![Block::default(); total_blocks],
        }
    }

    /// Claim the first run of `size` free blocks for `pid`
    ///
    /// Scans left to right and stops at the first run that reaches `size`.
    /// On failure nothing is modified.
    pub fn allocate(&mut self, size: BlockCount, pid: Pid) -> MemoryResult<Region> {
        if size == 0 {
            return Err(MemoryError::ZeroSize(pid));
        }
        if let Some(region) = self.owned_by(pid) {
            return Err(MemoryError::AlreadyResident {
                pid,
                start: region.start,
                end: region.end(),
            });
        }

        let Some(start) = self.find_first_fit(size) else {
            let largest_free_run = self.largest_free_run();
            debug!(pid, requested = size, largest_free_run, "No fitting free run");
            return Err(MemoryError::NoContiguousRun {
                requested: size,
                largest_free_run,
            });
        };

        let region = Region { start, len: size };
        for block in &mut self.blocks[region.start..=region.end()] {
            block.owner = Some(pid);
        }

        debug!(
            pid,
            start = region.start,
            end = region.end(),
            "Allocated {} blocks",
            size
        );
        Ok(region)
    }

    /// Start of the first free run reaching `size`; owned blocks reset the run
    fn find_first_fit(&self, size: BlockCount) -> Option<usize> {
        let mut run = 0;
        for (index, block) in self.blocks.iter().enumerate() {
            if block.is_free() {
                run += 1;
                if run == size {
                    return Some(index + 1 - size);
                }
            } else {
                run = 0;
            }
        }
        None
    }

    /// Free every block owned by `pid`, returning how many were freed
    pub fn release(&mut self, pid: Pid) -> BlockCount {
        let mut freed = 0;
        for block in self.blocks.iter_mut().filter(|b| b.owner == Some(pid)) {
            block.owner = None;
            freed += 1;
        }

        if freed > 0 {
            debug!(pid, freed, "Released blocks");
        }
        freed
    }

    /// Region currently held by `pid`, if any
    pub fn owned_by(&self, pid: Pid) -> Option<Region> {
        let start = self.blocks.iter().position(|b| b.owner == Some(pid))?;
        let len = self.blocks[start..]
            .iter()
            .take_while(|b| b.owner == Some(pid))
            .count();
        Some(Region { start, len })
    }

    pub fn total_blocks(&self) -> BlockCount {
        self.blocks.len()
    }

    pub fn free_blocks(&self) -> BlockCount {
        self.blocks.iter().filter(|b| b.is_free()).count()
    }

    pub fn used_blocks(&self) -> BlockCount {
        self.total_blocks() - self.free_blocks()
    }

    /// True when no block is owned
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(Block::is_free)
    }

    /// Length of the longest run of free blocks
    pub fn largest_free_run(&self) -> BlockCount {
        let mut best = 0;
        let mut run = 0;
        for block in &self.blocks {
            if block.is_free() {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }

    pub fn stats(&self) -> MemoryStats {
        let snapshot = self.snapshot();
        let free_blocks = self.free_blocks();
        MemoryStats {
            total_blocks: self.total_blocks(),
            used_blocks: self.total_blocks() - free_blocks,
            free_blocks,
            largest_free_run: self.largest_free_run(),
            free_runs: snapshot.iter().filter(|r| r.is_free()).count(),
        }
    }
}
