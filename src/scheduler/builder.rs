/*!
 * Scheduler Builder
 * Builder pattern for Scheduler construction
 */

use super::queue::ArrivalQueue;
use super::Scheduler;
use crate::core::config::SimConfig;
use crate::core::types::{Pid, SimResult};
use crate::memory::BlockAllocator;
use crate::monitoring::EventLog;
use crate::process::validation::{check_feasible, validate_spec};
use crate::process::{ProcessRegistry, ProcessSpec};
use tracing::info;

/// Builder for Scheduler
#[derive(Debug, Clone, Default)]
pub struct SchedulerBuilder {
    config: SimConfig,
    specs: Vec<ProcessSpec>,
}

impl SchedulerBuilder {
    /// Create a builder with default configuration and no processes
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Add one process; pids follow the order of submission
    pub fn with_process(mut self, spec: ProcessSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn with_processes<I>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = ProcessSpec>,
    {
        self.specs.extend(specs);
        self
    }

    /// Validate the batch and build a scheduler with its queue sorted by arrival
    ///
    /// Fails with `Unschedulable` when a process needs more blocks than the
    /// pool holds, since the run could never finish.
    pub fn build(self) -> SimResult<Scheduler> {
        self.config.validate()?;

        for (pid, spec) in self.specs.iter().enumerate() {
            let pid = pid as Pid;
            validate_spec(pid, spec)?;
            check_feasible(pid, spec, self.config.pool_blocks)?;
        }

        let registry: ProcessRegistry = self.specs.into_iter().collect();
        let mut queue: ArrivalQueue = registry.pids().collect();
        queue.sort_by_arrival(&registry);

        info!(
            processes = registry.len(),
            quantum = self.config.time_quantum,
            pool_blocks = self.config.pool_blocks,
            start_time = self.config.start_time,
            "Scheduler initialized"
        );

        Ok(Scheduler {
            clock: self.config.start_time,
            memory: BlockAllocator::new(self.config.pool_blocks),
            config: self.config,
            registry,
            queue,
            rotations: 0,
            events: EventLog::with_capacity(self.config.event_log_capacity),
        })
    }
}
