/*!
 * Event System
 * Strongly-typed scheduling events for the presentation layer
 */

use crate::core::types::{BlockCount, BlockIndex, Pid, Ticks};
use serde::Serialize;

/// Event severity for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Severity {
    Debug = 1,
    Info = 2,
    Warn = 3,
}

/// Event payload - one variant per scheduling decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
    /// Head of queue has not arrived yet and was rotated to the tail
    NotArrived { arrival_time: Ticks },
    /// Memory region claimed
    Admitted { start: BlockIndex, end: BlockIndex },
    /// No fitting free run; the process retries on a later rotation
    Denied {
        requested: BlockCount,
        largest_free_run: BlockCount,
    },
    /// One quantum executed; `remaining_time` is measured after it
    Executing { remaining_time: Ticks },
    /// Process retired and its memory released
    Finished { turnaround: Ticks },
}

/// Scheduling event stamped with the virtual clock
///
/// `clock` is the value when the decision was taken; for `Finished` it is
/// the completion time, after the final quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchedulerEvent {
    pub clock: Ticks,
    pub pid: Pid,
    #[serde(flatten)]
    pub payload: Payload,
    /// Consecutive rotations folded into this entry, starting at `clock`
    #[serde(skip_serializing_if = "is_single")]
    pub repeats: u64,
}

fn is_single(repeats: &u64) -> bool {
    *repeats == 1
}

impl SchedulerEvent {
    #[inline]
    pub fn new(clock: Ticks, pid: Pid, payload: Payload) -> Self {
        Self {
            clock,
            pid,
            payload,
            repeats: 1,
        }
    }

    pub fn severity(&self) -> Severity {
        match self.payload {
            Payload::NotArrived { .. } => Severity::Debug,
            Payload::Denied { .. } => Severity::Warn,
            Payload::Admitted { .. } | Payload::Executing { .. } | Payload::Finished { .. } => {
                Severity::Info
            }
        }
    }

    /// Short machine-friendly name, used as a tracing field
    pub const fn name(&self) -> &'static str {
        match self.payload {
            Payload::NotArrived { .. } => "not_arrived",
            Payload::Admitted { .. } => "admitted",
            Payload::Denied { .. } => "denied",
            Payload::Executing { .. } => "executing",
            Payload::Finished { .. } => "finished",
        }
    }

    /// Emit through `tracing` at the event's severity
    pub fn trace(&self) {
        match self.severity() {
            Severity::Debug => {
                tracing::debug!(pid = self.pid, clock = self.clock, event = self.name(), payload = ?self.payload)
            }
            Severity::Info => {
                tracing::info!(pid = self.pid, clock = self.clock, event = self.name(), payload = ?self.payload)
            }
            Severity::Warn => {
                tracing::warn!(pid = self.pid, clock = self.clock, event = self.name(), payload = ?self.payload)
            }
        }
    }
}
