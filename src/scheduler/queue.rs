/*!
 * Arrival Queue
 * FIFO of pids into the process registry, sortable by arrival time
 */

use super::sort::merge_sort_by_key;
use crate::core::errors::QueueError;
use crate::core::types::{Pid, Ticks};
use crate::process::ProcessRegistry;
use std::collections::VecDeque;

/// FIFO queue of process references
#[derive(Debug, Clone, Default)]
pub struct ArrivalQueue {
    entries: VecDeque<Pid>,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail
    #[inline]
    pub fn enqueue(&mut self, pid: Pid) {
        self.entries.push_back(pid);
    }

    /// Remove and return the head
    ///
    /// Calling this on an empty queue is a caller bug.
    #[inline]
    pub fn dequeue(&mut self) -> Result<Pid, QueueError> {
        self.entries.pop_front().ok_or(QueueError::Empty)
    }

    /// Head of the queue, without removing it
    #[inline]
    pub fn front(&self) -> Option<Pid> {
        self.entries.front().copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pids from head to tail
    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.entries.iter().copied()
    }

    /// Stable sort by the given key, rebuilding the queue in place
    pub fn sort_by_key<F>(&mut self, key: F)
    where
        F: Fn(Pid) -> Ticks,
    {
        let pids: Vec<Pid> = self.entries.drain(..).collect();
        self.entries = merge_sort_by_key(pids, |pid| key(*pid)).into();
    }

    /// Stable sort by arrival time; ties keep their current queue order
    ///
    /// Pids missing from the registry sort last.
    pub fn sort_by_arrival(&mut self, registry: &ProcessRegistry) {
        self.sort_by_key(|pid| registry.get(pid).map_or(Ticks::MAX, |p| p.arrival_time));
    }
}

impl FromIterator<Pid> for ArrivalQueue {
    fn from_iter<I: IntoIterator<Item = Pid>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;

    #[test]
    fn test_fifo_order() {
        let mut queue = ArrivalQueue::new();
        queue.enqueue(3);
        queue.enqueue(1);
        queue.enqueue(2);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.front(), Some(3));
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(3);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_dequeue_empty() {
        let mut queue = ArrivalQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
    }

    #[test]
    fn test_sort_by_arrival_is_stable() {
        let registry: ProcessRegistry = [(2, 1, 1), (2, 1, 1), (5, 1, 1)]
            .into_iter()
            .map(ProcessSpec::from)
            .collect();

        // Enqueued as pid2, pid0, pid1
        let mut queue: ArrivalQueue = [2, 0, 1].into_iter().collect();
        queue.sort_by_arrival(&registry);

        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_unknown_pid_last() {
        let registry: ProcessRegistry = [(9, 1, 1)].into_iter().map(ProcessSpec::from).collect();
        let mut queue: ArrivalQueue = [42, 0].into_iter().collect();
        queue.sort_by_arrival(&registry);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![0, 42]);
    }
}
