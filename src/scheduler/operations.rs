/*!
 * Scheduler Core Operations
 * One rotation of the round-robin loop, and the loop itself
 */

use super::stats::RunReport;
use super::Scheduler;
use crate::core::errors::SimulationError;
use crate::core::types::{Pid, SimResult, Ticks};
use crate::memory::{MemoryError, MemoryRun};
use crate::monitoring::{Payload, SchedulerEvent};
use tracing::{info, warn};

/// Record of a single rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    /// Process taken from the head of the queue
    pub pid: Pid,
    pub clock_before: Ticks,
    pub clock_after: Ticks,
    pub events: Vec<SchedulerEvent>,
    /// Memory map taken right after an admission, before any release
    pub memory_on_admission: Option<Vec<MemoryRun>>,
}

impl Scheduler {
    /// Run one rotation for the process at the head of the queue
    ///
    /// Returns `Ok(None)` once the queue is empty. Clock accounting per
    /// rotation: one bookkeeping tick always, plus one quantum when the
    /// process executes.
    ///
    /// An `Unschedulable` error leaves the offending process out of the
    /// queue; the scheduler should be discarded. A `ClockOverflow` error
    /// is raised before anything changes.
    pub fn step(&mut self) -> SimResult<Option<Rotation>> {
        let Some(head) = self.queue.front() else {
            return Ok(None);
        };
        self.ensure_clock_room(head)?;

        let pid = self.queue.dequeue()?;
        let clock_before = self.clock;
        let quantum = self.config.time_quantum;
        let mut events = Vec::with_capacity(3);
        let mut memory_on_admission = None;

        let process = self
            .registry
            .get_mut(pid)
            .ok_or(SimulationError::UnknownProcess(pid))?;

        if !process.has_arrived(self.clock) {
            events.push(SchedulerEvent::new(
                self.clock,
                pid,
                Payload::NotArrived {
                    arrival_time: process.arrival_time,
                },
            ));
            self.queue.enqueue(pid);
        } else {
            if !process.in_memory {
                match self.memory.allocate(process.memory_needed, pid) {
                    Ok(region) => {
                        process.in_memory = true;
                        process.admitted_at = Some(self.clock);
                        memory_on_admission = Some(self.memory.snapshot());
                        events.push(SchedulerEvent::new(
                            self.clock,
                            pid,
                            Payload::Admitted {
                                start: region.start,
                                end: region.end(),
                            },
                        ));
                    }
                    Err(MemoryError::NoContiguousRun {
                        requested,
                        largest_free_run,
                    }) => {
                        // Nothing else holds memory, so waiting cannot help
                        if self.memory.is_empty() {
                            warn!(pid, requested, "Process can never fit in the pool");
                            return Err(SimulationError::Unschedulable {
                                pid,
                                needed: requested,
                                pool: self.memory.total_blocks(),
                            });
                        }

                        process.denials += 1;
                        events.push(SchedulerEvent::new(
                            self.clock,
                            pid,
                            Payload::Denied {
                                requested,
                                largest_free_run,
                            },
                        ));
                        self.queue.enqueue(pid);
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            // Loading and the first quantum happen in the same rotation
            if process.in_memory {
                let started = self.clock;
                let finished = process.run_quantum(quantum);
                // Bounded by ensure_clock_room
                self.clock += quantum;

                events.push(SchedulerEvent::new(
                    started,
                    pid,
                    Payload::Executing {
                        remaining_time: process.remaining_time,
                    },
                ));

                if finished {
                    self.memory.release(pid);
                    process.in_memory = false;
                    process.completed_at = Some(self.clock);
                    events.push(SchedulerEvent::new(
                        self.clock,
                        pid,
                        Payload::Finished {
                            turnaround: self.clock.saturating_sub(process.arrival_time),
                        },
                    ));
                } else {
                    self.queue.enqueue(pid);
                }
            }
        }

        // Bookkeeping tick charged to every rotation
        self.clock += 1;
        self.rotations += 1;

        for event in &events {
            event.trace();
            self.events.record(*event);
        }

        Ok(Some(Rotation {
            pid,
            clock_before,
            clock_after: self.clock,
            events,
            memory_on_admission,
        }))
    }

    /// Fail unless the clock can absorb the worst-case cost of rotating `pid`
    ///
    /// An arrived process may execute, costing a quantum plus the
    /// bookkeeping tick; otherwise only the tick is charged.
    fn ensure_clock_room(&self, pid: Pid) -> SimResult<()> {
        let process = self
            .registry
            .get(pid)
            .ok_or(SimulationError::UnknownProcess(pid))?;
        let quantum = self.config.time_quantum;

        let cost = if process.has_arrived(self.clock) {
            quantum.checked_add(1)
        } else {
            Some(1)
        };

        match cost.and_then(|c| self.clock.checked_add(c)) {
            Some(_) => Ok(()),
            None => {
                warn!(pid, clock = self.clock, quantum, "Virtual clock would overflow");
                Err(SimulationError::ClockOverflow {
                    clock: self.clock,
                    quantum,
                })
            }
        }
    }

    /// Rotate until every process has finished
    pub fn run(&mut self) -> SimResult<RunReport> {
        while self.step()?.is_some() {}

        info!(
            final_clock = self.clock,
            rotations = self.rotations,
            "All processes finished"
        );
        Ok(self.report())
    }
}
