/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type, assigned by input order starting at 0
pub type Pid = u32;

/// Virtual clock value and durations, in ticks
pub type Ticks = u64;

/// Number of unit memory blocks
pub type BlockCount = usize;

/// Index of a unit memory block
pub type BlockIndex = usize;

/// Common result type for simulation operations
pub type SimResult<T> = Result<T, super::errors::SimulationError>;
