/*!
 * Arrival Queue Tests
 * FIFO semantics and stable arrival-time sorting
 */

use pretty_assertions::assert_eq;
use rr_memsim::{ArrivalQueue, Pid, ProcessSpec, QueueError, Scheduler, SimConfig};
use rr_memsim::process::ProcessRegistry;

fn registry(arrivals: &[u64]) -> ProcessRegistry {
    arrivals
        .iter()
        .map(|&arrival| ProcessSpec::new(arrival, 1, 1))
        .collect()
}

fn order(queue: &ArrivalQueue) -> Vec<Pid> {
    queue.iter().collect()
}

#[test]
fn test_sort_resolves_ties_by_insertion_order() {
    // pid0 and pid1 arrive at 2, pid2 at 5; enqueued as pid2, pid0, pid1
    let registry = registry(&[2, 2, 5]);
    let mut queue = ArrivalQueue::new();
    queue.enqueue(2);
    queue.enqueue(0);
    queue.enqueue(1);

    queue.sort_by_arrival(&registry);

    assert_eq!(order(&queue), vec![0, 1, 2]);
}

#[test]
fn test_sort_is_deterministic_for_any_initial_order() {
    let registry = registry(&[3, 1, 3, 0, 1]);
    let expected = vec![3, 1, 4, 0, 2];

    let mut a: ArrivalQueue = (0..5).collect();
    a.sort_by_arrival(&registry);
    assert_eq!(order(&a), expected);

    // Sorting an already sorted queue changes nothing
    a.sort_by_arrival(&registry);
    assert_eq!(order(&a), expected);
}

#[test]
fn test_tie_order_follows_current_queue_order() {
    let registry = registry(&[0, 0, 0]);
    let mut queue: ArrivalQueue = [2, 0, 1].into_iter().collect();
    queue.sort_by_arrival(&registry);
    assert_eq!(order(&queue), vec![2, 0, 1]);
}

#[test]
fn test_fifo_after_sort() {
    let registry = registry(&[1, 0]);
    let mut queue: ArrivalQueue = (0..2).collect();
    queue.sort_by_arrival(&registry);

    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(1);
    assert_eq!(queue.dequeue(), Ok(0));
    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn test_large_batch_sorted() {
    let arrivals: Vec<u64> = (0..1000).map(|i| (i * 7919) % 97).collect();
    let registry = registry(&arrivals);
    let mut queue: ArrivalQueue = (0..1000).collect();
    queue.sort_by_arrival(&registry);

    let sorted = order(&queue);
    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (ta, tb) = (arrivals[a as usize], arrivals[b as usize]);
        assert!(ta < tb || (ta == tb && a < b));
    }
}

#[test]
fn test_scheduler_queue_starts_sorted() {
    let sched = Scheduler::builder()
        .with_config(SimConfig::new())
        .with_processes([(5, 1, 1), (2, 1, 1), (2, 1, 1)].map(ProcessSpec::from))
        .build()
        .unwrap();

    let pids: Vec<Pid> = sched.queue_snapshot().iter().map(|p| p.pid).collect();
    assert_eq!(pids, vec![1, 2, 0]);
}
