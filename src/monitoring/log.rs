/*!
 * Event Log
 * Bounded run history with folding of repeated idle rotations
 */

use super::events::{Payload, SchedulerEvent};

/// Retained scheduling history
///
/// Consecutive `NotArrived` rotations of the same process fold into one
/// entry whose `repeats` counts them. Once `capacity` entries are held,
/// further entries are counted in `dropped` instead of stored.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<SchedulerEvent>,
    capacity: usize,
    dropped: u64,
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            dropped: 0,
        }
    }

    /// Record an event, returns false if it was dropped
    pub fn record(&mut self, event: SchedulerEvent) -> bool {
        if let Some(last) = self.entries.last_mut() {
            if last.pid == event.pid
                && matches!(last.payload, Payload::NotArrived { .. })
                && matches!(event.payload, Payload::NotArrived { .. })
            {
                last.repeats = last.repeats.saturating_add(event.repeats);
                return true;
            }
        }

        if self.entries.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.entries.push(event);
        true
    }

    /// Retained entries, oldest first
    pub fn entries(&self) -> &[SchedulerEvent] {
        &self.entries
    }

    /// Entries refused because the log was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
