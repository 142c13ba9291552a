/*!
 * Memory Module
 * Block-granular memory pool with first-fit allocation
 */

pub mod allocator;
pub mod snapshot;
pub mod types;

// Re-export public API
pub use allocator::BlockAllocator;
pub use types::{Block, MemoryError, MemoryResult, MemoryRun, MemoryStats, Region, RunState};
