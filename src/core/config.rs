/*!
 * Simulation Configuration
 *
 * Runtime parameters injected by the host: quantum, pool size, batch size.
 */

use super::errors::ConfigError;
use super::types::{BlockCount, Ticks};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_QUANTUM: Ticks = 3;
pub const DEFAULT_POOL_BLOCKS: BlockCount = 512;
pub const DEFAULT_PROCESS_COUNT: usize = 5;
pub const DEFAULT_START_TIME: Ticks = 1;
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 4096;

/// Environment variables read by [`SimConfig::from_env`]
pub const ENV_TIME_QUANTUM: &str = "SIM_TIME_QUANTUM";
pub const ENV_POOL_BLOCKS: &str = "SIM_POOL_BLOCKS";
pub const ENV_PROCESS_COUNT: &str = "SIM_PROCESS_COUNT";
pub const ENV_START_TIME: &str = "SIM_START_TIME";
pub const ENV_EVENT_LOG_CAPACITY: &str = "SIM_EVENT_LOG_CAPACITY";

/// Simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimConfig {
    /// Ticks granted per execution turn (default: 3)
    pub time_quantum: Ticks,

    /// Unit blocks in the memory pool (default: 512)
    pub pool_blocks: BlockCount,

    /// Processes the host collects before a run (default: 5)
    pub process_count: usize,

    /// Virtual clock value before the first rotation (default: 1)
    pub start_time: Ticks,

    /// Entries kept in the run log after folding idle rotations (default: 4096)
    pub event_log_capacity: usize,
}

impl SimConfig {
    pub fn new() -> Self {
        Self {
            time_quantum: DEFAULT_TIME_QUANTUM,
            pool_blocks: DEFAULT_POOL_BLOCKS,
            process_count: DEFAULT_PROCESS_COUNT,
            start_time: DEFAULT_START_TIME,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
        }
    }

    pub fn with_time_quantum(mut self, quantum: Ticks) -> Self {
        self.time_quantum = quantum;
        self
    }

    pub fn with_pool_blocks(mut self, blocks: BlockCount) -> Self {
        self.pool_blocks = blocks;
        self
    }

    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    pub fn with_start_time(mut self, start: Ticks) -> Self {
        self.start_time = start;
        self
    }

    pub fn with_event_log_capacity(mut self, capacity: usize) -> Self {
        self.event_log_capacity = capacity;
        self
    }

    /// Load configuration from `SIM_*` environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(v) = parse_var(&lookup, ENV_TIME_QUANTUM)? {
            config.time_quantum = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_POOL_BLOCKS)? {
            config.pool_blocks = v as BlockCount;
        }
        if let Some(v) = parse_var(&lookup, ENV_PROCESS_COUNT)? {
            config.process_count = v as usize;
        }
        if let Some(v) = parse_var(&lookup, ENV_START_TIME)? {
            config.start_time = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_EVENT_LOG_CAPACITY)? {
            config.event_log_capacity = v as usize;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_quantum == 0 {
            return Err(ConfigError::ZeroQuantum);
        }
        if self.pool_blocks == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<F>(lookup: &F, var: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
    }
}
