//! First-Come First-Served Policy.
//!
//! A single FIFO run queue; processes run until they block. The quantum is
//! effectively unlimited, so no quantum preemption ever fires.

use std::collections::VecDeque;

use super::SchedulingPolicy;
use crate::sched::process::{Pid, Process};

/// FCFS policy state.
#[derive(Debug, Default)]
pub struct Fcfs {
    queue: VecDeque<Pid>,
}

impl Fcfs {
    /// Creates an empty FCFS run queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchedulingPolicy for Fcfs {
    fn add(&mut self, pid: Pid, _procs: &mut [Process]) {
        self.queue.push_back(pid);
    }

    fn next(&mut self) -> Option<Pid> {
        self.queue.pop_front()
    }

    fn preempts(&self) -> bool {
        false
    }
}
