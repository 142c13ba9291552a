/*!
 * Round-Robin Memory Simulator Library
 * Round-robin CPU scheduling over a first-fit, block-granular memory pool
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::config::SimConfig;
pub use crate::core::errors::{ConfigError, InputError, QueueError, SimulationError};
pub use crate::core::types::{BlockCount, BlockIndex, Pid, SimResult, Ticks};
pub use memory::{BlockAllocator, MemoryError, MemoryRun, MemoryStats, Region, RunState};
pub use monitoring::{init_tracing, EventLog, Payload, SchedulerEvent, Severity};
pub use process::{parse_specs, Process, ProcessSnapshot, ProcessSpec, ProcessState};
pub use scheduler::{
    ArrivalQueue, ProcessStats, Rotation, RunReport, Scheduler, SchedulerBuilder,
};
