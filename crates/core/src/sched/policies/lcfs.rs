//! Last-Come First-Served Policy.
//!
//! Admission pushes to the front of the queue, so the most recently READY
//! process is dispatched first. Quantum is effectively unlimited.

use std::collections::VecDeque;

use super::SchedulingPolicy;
use crate::sched::process::{Pid, Process};

/// LCFS policy state.
#[derive(Debug, Default)]
pub struct Lcfs {
    queue: VecDeque<Pid>,
}

impl Lcfs {
    /// Creates an empty LCFS run queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchedulingPolicy for Lcfs {
    fn add(&mut self, pid: Pid, _procs: &mut [Process]) {
        self.queue.push_front(pid);
    }

    fn next(&mut self) -> Option<Pid> {
        self.queue.pop_front()
    }

    fn preempts(&self) -> bool {
        false
    }
}
