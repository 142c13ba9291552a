/*!
 * Process Registry
 * Owns every process record for the duration of a run
 */

use super::types::{Process, ProcessSpec};
use crate::core::types::Pid;

/// Arena of process records indexed by pid
///
/// Pids are dense and assigned in submission order, so the pid doubles as
/// the index into the arena.
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a process and return its pid
    pub fn register(&mut self, spec: ProcessSpec) -> Pid {
        let pid = self.processes.len() as Pid;
        self.processes.push(Process::new(pid, spec));
        pid
    }

    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.processes.get(pid as usize)
    }

    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut Process> {
        self.processes.get_mut(pid as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn pids(&self) -> impl Iterator<Item = Pid> + '_ {
        self.processes.iter().map(|p| p.pid)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl FromIterator<ProcessSpec> for ProcessRegistry {
    fn from_iter<I: IntoIterator<Item = ProcessSpec>>(iter: I) -> Self {
        let mut registry = Self::new();
        for spec in iter {
            registry.register(spec);
        }
        registry
    }
}
