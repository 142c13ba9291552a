/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use super::types::{BlockCount, Pid, Ticks};
use miette::Diagnostic;
use thiserror::Error;

// Re-export MemoryError from memory module
pub use crate::memory::MemoryError;

/// Arrival queue errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum QueueError {
    #[error("Dequeue on empty arrival queue")]
    #[diagnostic(
        code(queue::empty),
        help("Check is_empty() before dequeueing. This is a caller bug, not a runtime condition.")
    )]
    Empty,
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Time quantum must be at least 1 tick")]
    #[diagnostic(code(config::zero_quantum), help("Set SIM_TIME_QUANTUM to a positive integer."))]
    ZeroQuantum,

    #[error("Memory pool must contain at least 1 block")]
    #[diagnostic(code(config::empty_pool), help("Set SIM_POOL_BLOCKS to a positive integer."))]
    EmptyPool,

    #[error("Invalid value for {var}: '{value}'")]
    #[diagnostic(code(config::invalid_env), help("Expected a non-negative integer."))]
    InvalidEnv { var: &'static str, value: String },
}

/// Process input errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum InputError {
    #[error("Expected {expected} processes, input ended after {found}")]
    #[diagnostic(
        code(input::truncated),
        help("Each process needs three integers: arrival_time duration memory_needed.")
    )]
    Truncated { expected: usize, found: usize },

    #[error("Process {index}: '{token}' is not a non-negative integer")]
    #[diagnostic(code(input::not_a_number))]
    NotANumber { index: usize, token: String },
}

/// Unified simulation error type with miette diagnostics
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum SimulationError {
    #[error(
        "Process {pid} is unschedulable: needs {needed} contiguous blocks, pool has {pool}"
    )]
    #[diagnostic(
        code(scheduler::unschedulable),
        help("Increase SIM_POOL_BLOCKS or lower the process memory requirement.")
    )]
    Unschedulable {
        pid: Pid,
        needed: BlockCount,
        pool: BlockCount,
    },

    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(
        code(process::invalid),
        help("Duration and memory_needed must both be positive.")
    )]
    InvalidProcess { pid: Pid, reason: String },

    #[error("Virtual clock overflow at {clock} with quantum {quantum}")]
    #[diagnostic(
        code(scheduler::clock_overflow),
        help("Lower SIM_TIME_QUANTUM or SIM_START_TIME.")
    )]
    ClockOverflow { clock: Ticks, quantum: Ticks },

    #[error("Process {0} is not registered")]
    #[diagnostic(code(process::unknown))]
    UnknownProcess(Pid),

    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Queue error: {0}")]
    #[diagnostic(transparent)]
    Queue(#[from] QueueError),

    #[error("Memory error: {0}")]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("Input error: {0}")]
    #[diagnostic(transparent)]
    Input(#[from] InputError),
}
