//! Round-Robin Policy.
//!
//! A FIFO run queue driven by the configured quantum. RR ignores priority
//! but shares admission with the priority family, so every admission resets
//! the dynamic priority to `static_prio - 1`.

use std::collections::VecDeque;

use super::SchedulingPolicy;
use crate::sched::process::{Pid, Process};

/// Round-robin policy state.
#[derive(Debug, Default)]
pub struct RoundRobin {
    queue: VecDeque<Pid>,
}

impl RoundRobin {
    /// Creates an empty round-robin run queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchedulingPolicy for RoundRobin {
    fn add(&mut self, pid: Pid, procs: &mut [Process]) {
        let p = &mut procs[pid];
        p.dynamic_prio = p.static_prio as i32 - 1;
        self.queue.push_back(pid);
    }

    fn next(&mut self) -> Option<Pid> {
        self.queue.pop_front()
    }

    fn preempts(&self) -> bool {
        false
    }
}
