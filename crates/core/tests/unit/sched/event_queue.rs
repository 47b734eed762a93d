//! Event-Queue Tests.
//!
//! The queue's two contracts are load-bearing for determinism: stable FIFO
//! ordering among equal timestamps, and the cancel-one-future-event
//! primitive used by preemptive priority.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use osim_core::sched::event::{Event, EventQueue, Transition};
use osim_core::sched::process::ProcState;

fn ev(timestamp: u64, pid: usize) -> Event {
    Event {
        timestamp,
        pid,
        old_state: ProcState::Running,
        new_state: ProcState::Blocked,
    }
}

/// Events pop in timestamp order regardless of insertion order.
#[test]
fn pops_in_timestamp_order() {
    let mut q = EventQueue::new();
    q.push(ev(5, 0));
    q.push(ev(3, 1));
    q.push(ev(9, 2));
    q.push(ev(1, 3));
    let order: Vec<u64> = std::iter::from_fn(|| q.pop()).map(|e| e.timestamp).collect();
    assert_eq!(order, vec![1, 3, 5, 9]);
}

/// Equal timestamps preserve insertion order: a later push lands after
/// every event already scheduled for that instant.
#[test]
fn equal_timestamps_are_fifo() {
    let mut q = EventQueue::new();
    q.push(ev(5, 0));
    q.push(ev(5, 1));
    q.push(ev(3, 2));
    q.push(ev(5, 3));
    let order: Vec<usize> = std::iter::from_fn(|| q.pop()).map(|e| e.pid).collect();
    assert_eq!(order, vec![2, 0, 1, 3]);
}

/// `next_time` peeks without consuming.
#[test]
fn next_time_peeks() {
    let mut q = EventQueue::new();
    assert_eq!(q.next_time(), None);
    q.push(ev(7, 0));
    assert_eq!(q.next_time(), Some(7));
    assert_eq!(q.len(), 1);
}

/// Cancellation removes exactly one event for the process, and only if its
/// timestamp differs from the current instant.
#[test]
fn remove_future_skips_current_instant() {
    let mut q = EventQueue::new();
    q.push(ev(10, 0));
    q.push(ev(10, 1));
    q.push(ev(20, 1));

    // pid 1's event at t=10 is "now"; only the t=20 one may go.
    assert!(q.remove_future(1, 10));
    assert_eq!(q.len(), 2);
    assert!(!q.remove_future(1, 10));

    // pid 0 has nothing beyond the current instant either.
    assert!(!q.remove_future(0, 10));
    assert_eq!(q.len(), 2);
}

/// Cancelling an absent process is not an error.
#[test]
fn remove_future_missing_process() {
    let mut q = EventQueue::new();
    q.push(ev(4, 0));
    assert!(!q.remove_future(9, 0));
    assert_eq!(q.len(), 1);
}

/// Transition derivation covers the four `(old, new)` shapes.
#[test]
fn transition_derivation() {
    let t = |old, new| {
        Event {
            timestamp: 0,
            pid: 0,
            old_state: old,
            new_state: new,
        }
        .transition()
    };
    assert_eq!(t(ProcState::Created, ProcState::Ready), Transition::ToReady);
    assert_eq!(t(ProcState::Blocked, ProcState::Ready), Transition::ToReady);
    assert_eq!(t(ProcState::Running, ProcState::Ready), Transition::ToPreempt);
    assert_eq!(t(ProcState::Ready, ProcState::Running), Transition::ToRun);
    assert_eq!(t(ProcState::Running, ProcState::Blocked), Transition::ToBlock);
}

proptest! {
    /// Popped timestamps are nondecreasing for arbitrary push sequences.
    #[test]
    fn timestamps_nondecreasing(stamps in proptest::collection::vec(0u64..100, 0..50)) {
        let mut q = EventQueue::new();
        for (pid, &ts) in stamps.iter().enumerate() {
            q.push(ev(ts, pid));
        }
        let mut last = 0;
        while let Some(e) = q.pop() {
            prop_assert!(e.timestamp >= last);
            last = e.timestamp;
        }
    }
}
