//! Priority and Preemptive-Priority Policies.
//!
//! Both maintain two arrays of FIFO queues indexed by dynamic priority:
//! **active** and **expired**. Selection scans active from the highest
//! level down; when every active level is empty the arrays are swapped and
//! scanned once more. A process whose dynamic priority has decayed below
//! zero is reset to `static_prio - 1` and parked on the expired side, so it
//! only runs again after the current active set drains.
//!
//! The preemptive variant differs only in answering `preempts()`; the
//! engine performs the actual runner cancellation.

use std::collections::VecDeque;
use std::mem;

use super::SchedulingPolicy;
use crate::sched::process::{Pid, Process};

/// Dual priority-indexed queue arrays shared by both variants.
#[derive(Debug)]
struct DualQueues {
    active: Vec<VecDeque<Pid>>,
    expired: Vec<VecDeque<Pid>>,
}

impl DualQueues {
    fn new(max_prio: usize) -> Self {
        Self {
            active: (0..max_prio).map(|_| VecDeque::new()).collect(),
            expired: (0..max_prio).map(|_| VecDeque::new()).collect(),
        }
    }

    fn add(&mut self, pid: Pid, procs: &mut [Process]) {
        let p = &mut procs[pid];
        if p.dynamic_prio < 0 {
            p.dynamic_prio = p.static_prio as i32 - 1;
            self.expired[p.dynamic_prio as usize].push_back(pid);
        } else {
            self.active[p.dynamic_prio as usize].push_back(pid);
        }
    }

    fn next(&mut self) -> Option<Pid> {
        if let Some(pid) = Self::pop_highest(&mut self.active) {
            return Some(pid);
        }
        mem::swap(&mut self.active, &mut self.expired);
        Self::pop_highest(&mut self.active)
    }

    fn pop_highest(levels: &mut [VecDeque<Pid>]) -> Option<Pid> {
        levels.iter_mut().rev().find_map(VecDeque::pop_front)
    }
}

/// Non-preemptive priority policy state.
#[derive(Debug)]
pub struct Prio {
    queues: DualQueues,
}

impl Prio {
    /// Creates empty queue arrays with `max_prio` levels.
    pub fn new(max_prio: usize) -> Self {
        Self {
            queues: DualQueues::new(max_prio),
        }
    }
}

impl SchedulingPolicy for Prio {
    fn add(&mut self, pid: Pid, procs: &mut [Process]) {
        self.queues.add(pid, procs);
    }

    fn next(&mut self) -> Option<Pid> {
        self.queues.next()
    }

    fn preempts(&self) -> bool {
        false
    }
}

/// Preemptive priority policy state.
#[derive(Debug)]
pub struct PrePrio {
    queues: DualQueues,
}

impl PrePrio {
    /// Creates empty queue arrays with `max_prio` levels.
    pub fn new(max_prio: usize) -> Self {
        Self {
            queues: DualQueues::new(max_prio),
        }
    }
}

impl SchedulingPolicy for PrePrio {
    fn add(&mut self, pid: Pid, procs: &mut [Process]) {
        self.queues.add(pid, procs);
    }

    fn next(&mut self) -> Option<Pid> {
        self.queues.next()
    }

    fn preempts(&self) -> bool {
        true
    }
}
