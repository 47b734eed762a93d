//! Shortest-Remaining-Time-First Policy.
//!
//! The run queue is kept ordered by remaining CPU time, ascending. A new
//! process is inserted after every queued process with remaining time `<=`
//! its own, so ties dispatch in admission order. Non-preemptive: a running
//! process keeps the CPU even if a shorter one turns READY.

use std::collections::VecDeque;

use super::SchedulingPolicy;
use crate::sched::process::{Pid, Process};

/// SRTF policy state.
#[derive(Debug, Default)]
pub struct Srtf {
    queue: VecDeque<Pid>,
}

impl Srtf {
    /// Creates an empty SRTF run queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchedulingPolicy for Srtf {
    fn add(&mut self, pid: Pid, procs: &mut [Process]) {
        let remaining = procs[pid].remaining_cpu_time;
        let pos = self
            .queue
            .iter()
            .position(|&q| procs[q].remaining_cpu_time > remaining)
            .unwrap_or(self.queue.len());
        self.queue.insert(pos, pid);
    }

    fn next(&mut self) -> Option<Pid> {
        self.queue.pop_front()
    }

    fn preempts(&self) -> bool {
        false
    }
}
