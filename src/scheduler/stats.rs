/*!
 * Scheduler Statistics
 * Per-process outcomes and the end-of-run report
 */

use crate::core::types::{BlockCount, Pid, Ticks};
use crate::memory::MemoryRun;
use crate::monitoring::SchedulerEvent;
use crate::process::Process;
use serde::Serialize;

/// Outcome of one process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStats {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub duration: Ticks,
    pub memory_needed: BlockCount,
    pub admitted_at: Option<Ticks>,
    pub completed_at: Option<Ticks>,
    /// Completion time minus arrival time
    pub turnaround: Option<Ticks>,
    /// Failed allocation attempts
    pub denials: u32,
    pub quanta: u32,
}

impl From<&Process> for ProcessStats {
    fn from(p: &Process) -> Self {
        Self {
            pid: p.pid,
            arrival_time: p.arrival_time,
            duration: p.duration,
            memory_needed: p.memory_needed,
            admitted_at: p.admitted_at,
            completed_at: p.completed_at,
            turnaround: p.completed_at.map(|t| t.saturating_sub(p.arrival_time)),
            denials: p.denials,
            quanta: p.quanta,
        }
    }
}

/// Everything a presentation layer needs after a run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub final_clock: Ticks,
    pub rotations: u64,
    pub processes: Vec<ProcessStats>,
    /// Run log as retained by the scheduler
    pub events: Vec<SchedulerEvent>,
    /// Events that did not fit in the run log
    pub events_dropped: u64,
    pub final_memory: Vec<MemoryRun>,
}

impl RunReport {
    /// True when every process reached its terminal state
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(|p| p.completed_at.is_some())
    }

    pub fn average_turnaround(&self) -> Option<f64> {
        let finished: Vec<Ticks> = self.processes.iter().filter_map(|p| p.turnaround).collect();
        if finished.is_empty() {
            return None;
        }
        Some(finished.iter().sum::<Ticks>() as f64 / finished.len() as f64)
    }

    pub fn total_denials(&self) -> u64 {
        self.processes.iter().map(|p| p.denials as u64).sum()
    }
}
