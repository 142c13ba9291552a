/*!
 * Process Types
 * Process records and their read-only views
 */

use crate::core::types::{BlockCount, Pid, Ticks};
use serde::{Deserialize, Serialize};

/// Input tuple describing one process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub arrival_time: Ticks,
    pub duration: Ticks,
    pub memory_needed: BlockCount,
}

impl ProcessSpec {
    pub fn new(arrival_time: Ticks, duration: Ticks, memory_needed: BlockCount) -> Self {
        Self {
            arrival_time,
            duration,
            memory_needed,
        }
    }
}

impl From<(Ticks, Ticks, BlockCount)> for ProcessSpec {
    fn from((arrival_time, duration, memory_needed): (Ticks, Ticks, BlockCount)) -> Self {
        Self::new(arrival_time, duration, memory_needed)
    }
}

/// Scheduling state relative to the virtual clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Clock has not reached the arrival time yet
    NotArrived,
    /// Arrived, no memory region yet
    Waiting,
    /// Holds a memory region and competes for the CPU
    Loaded,
    /// Remaining time exhausted, memory released
    Finished,
}

/// Process record owned by the registry for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub duration: Ticks,
    pub remaining_time: Ticks,
    pub memory_needed: BlockCount,
    pub in_memory: bool,

    // Bookkeeping for run statistics
    pub admitted_at: Option<Ticks>,
    pub completed_at: Option<Ticks>,
    pub denials: u32,
    pub quanta: u32,
}

impl Process {
    pub fn new(pid: Pid, spec: ProcessSpec) -> Self {
        Self {
            pid,
            arrival_time: spec.arrival_time,
            duration: spec.duration,
            remaining_time: spec.duration,
            memory_needed: spec.memory_needed,
            in_memory: false,
            admitted_at: None,
            completed_at: None,
            denials: 0,
            quanta: 0,
        }
    }

    /// Terminal once no CPU time remains
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    #[inline]
    pub fn has_arrived(&self, clock: Ticks) -> bool {
        clock >= self.arrival_time
    }

    pub fn state(&self, clock: Ticks) -> ProcessState {
        if self.is_finished() {
            ProcessState::Finished
        } else if self.in_memory {
            ProcessState::Loaded
        } else if self.has_arrived(clock) {
            ProcessState::Waiting
        } else {
            ProcessState::NotArrived
        }
    }

    /// Consume one quantum, returning true when the process finished
    pub fn run_quantum(&mut self, quantum: Ticks) -> bool {
        self.remaining_time = self.remaining_time.saturating_sub(quantum);
        self.quanta += 1;
        self.is_finished()
    }

    pub fn snapshot(&self) -> ProcessSnapshot {
        ProcessSnapshot {
            pid: self.pid,
            arrival_time: self.arrival_time,
            duration: self.duration,
            memory_needed: self.memory_needed,
            remaining_time: self.remaining_time,
            in_memory: self.in_memory,
        }
    }
}

/// Queue entry view for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessSnapshot {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub duration: Ticks,
    pub memory_needed: BlockCount,
    pub remaining_time: Ticks,
    pub in_memory: bool,
}
