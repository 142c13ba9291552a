/*!
 * Memory Types
 * Common types for block memory management
 */

use crate::core::types::{BlockCount, BlockIndex, Pid};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// `NoContiguousRun` is the expected, recoverable outcome of a full or
/// fragmented pool. The other variants are caller bugs.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum MemoryError {
    #[error("No contiguous run of {requested} free blocks (largest free run: {largest_free_run})")]
    #[diagnostic(
        code(memory::no_contiguous_run),
        help("Retry after another process releases its blocks.")
    )]
    NoContiguousRun {
        requested: BlockCount,
        largest_free_run: BlockCount,
    },

    #[error("Cannot allocate zero blocks for PID {0}")]
    #[diagnostic(code(memory::zero_size))]
    ZeroSize(Pid),

    #[error("PID {pid} already holds blocks {start}..={end}")]
    #[diagnostic(
        code(memory::already_resident),
        help("Release the existing region before allocating again.")
    )]
    AlreadyResident {
        pid: Pid,
        start: BlockIndex,
        end: BlockIndex,
    },
}

/// A single unit block; `None` means free
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Block {
    pub owner: Option<Pid>,
}

impl Block {
    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}

/// Contiguous region claimed by one allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub start: BlockIndex,
    pub len: BlockCount,
}

impl Region {
    /// Last block of the region (inclusive)
    #[inline]
    pub fn end(&self) -> BlockIndex {
        self.start + self.len - 1
    }
}

/// State shared by every block of a snapshot run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "pid", rename_all = "snake_case")]
pub enum RunState {
    Free,
    UsedBy(Pid),
}

/// Maximal run of adjacent blocks with the same state, `end` inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryRun {
    pub start: BlockIndex,
    pub end: BlockIndex,
    #[serde(flatten)]
    pub state: RunState,
}

impl MemoryRun {
    #[inline]
    pub fn len(&self) -> BlockCount {
        self.end - self.start + 1
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.state == RunState::Free
    }
}

/// Block usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    pub total_blocks: BlockCount,
    pub used_blocks: BlockCount,
    pub free_blocks: BlockCount,
    pub largest_free_run: BlockCount,
    pub free_runs: usize,
}

impl MemoryStats {
    /// Share of the pool in use, as a percentage
    pub fn usage_percentage(&self) -> f64 {
        if self.total_blocks == 0 {
            return 0.0;
        }
        self.used_blocks as f64 / self.total_blocks as f64 * 100.0
    }
}
