//! Event queue for the discrete-event engine.
//!
//! Events are kept in timestamp order with stable FIFO ordering among equal
//! timestamps: an insert lands *after* every event sharing its timestamp.
//! This tie-break is load-bearing: same-instant arrival, unblock, and
//! preemption events must drain in insertion order for the simulation to be
//! deterministic.

use std::collections::VecDeque;

use crate::sched::process::{Pid, ProcState};

/// A scheduled state change for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Simulated time at which the transition fires.
    pub timestamp: u64,
    /// Target process.
    pub pid: Pid,
    /// State the process held when the event was scheduled.
    pub old_state: ProcState,
    /// State the process moves to.
    pub new_state: ProcState,
}

/// The transition kind, derived from the `(old, new)` state pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Arrival or unblock; the process joins a run queue.
    ToReady,
    /// Quantum expiry; RUNNING back to READY.
    ToPreempt,
    /// Dispatch; READY to RUNNING.
    ToRun,
    /// Burst end; RUNNING to BLOCKED (or termination).
    ToBlock,
}

impl Event {
    /// Derives the transition kind from the state pair.
    pub fn transition(&self) -> Transition {
        match self.new_state {
            ProcState::Blocked => Transition::ToBlock,
            ProcState::Running => Transition::ToRun,
            ProcState::Ready if self.old_state == ProcState::Running => Transition::ToPreempt,
            _ => Transition::ToReady,
        }
    }
}

/// Timestamp-ordered queue with stable same-time ordering.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts after all events with timestamps `<=` the new event's.
    pub fn push(&mut self, event: Event) {
        let pos = self
            .events
            .iter()
            .position(|e| e.timestamp > event.timestamp)
            .unwrap_or(self.events.len());
        self.events.insert(pos, event);
    }

    /// Removes and returns the earliest event.
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Timestamp of the earliest pending event.
    pub fn next_time(&self) -> Option<u64> {
        self.events.front().map(|e| e.timestamp)
    }

    /// Cancels the first pending event for `pid` whose timestamp differs
    /// from `now`; reports whether one was removed.
    ///
    /// Used by preemptive priority: when a higher-priority process turns
    /// READY, the runner's scheduled block/preempt event is stale and is
    /// rebuilt from the current instant. Not finding one means the runner
    /// was already due to yield at this very timestamp.
    pub fn remove_future(&mut self, pid: Pid, now: u64) -> bool {
        let pos = self
            .events
            .iter()
            .position(|e| e.pid == pid && e.timestamp != now);
        match pos {
            Some(i) => {
                let _ = self.events.remove(i);
                true
            }
            None => false,
        }
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is drained.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
