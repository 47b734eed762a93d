//! CPU Scheduling Policies.
//!
//! Implements the run-queue disciplines the discrete-event engine can be
//! configured with.
//!
//! # Policies
//!
//! - `Fcfs`: first-come first-served.
//! - `Lcfs`: last-come first-served.
//! - `Srtf`: shortest remaining time first (non-preemptive).
//! - `RoundRobin`: FIFO with quantum expiry.
//! - `Prio`: priority with dual active/expired queue arrays.
//! - `PrePrio`: `Prio` plus preemption of a lower-priority runner.

/// First-come first-served policy.
pub mod fcfs;

/// Last-come first-served policy.
pub mod lcfs;

/// Priority and preemptive-priority policies.
pub mod prio;

/// Round-robin policy.
pub mod rr;

/// Shortest-remaining-time-first policy.
pub mod srtf;

pub use fcfs::Fcfs;
pub use lcfs::Lcfs;
pub use prio::{PrePrio, Prio};
pub use rr::RoundRobin;
pub use srtf::Srtf;

use crate::config::{SchedConfig, SchedPolicyKind};
use crate::sched::process::{Pid, Process};

/// Capability set of a scheduling policy.
///
/// Admission may rewrite the process's dynamic priority (RR and the
/// priority family do), so it receives the process arena.
pub trait SchedulingPolicy {
    /// Admits a READY process into the run queue(s).
    fn add(&mut self, pid: Pid, procs: &mut [Process]);

    /// Removes and returns the next process to dispatch.
    fn next(&mut self) -> Option<Pid>;

    /// Whether a newly READY process may preempt the runner.
    fn preempts(&self) -> bool;
}

/// Statically dispatched policy selection.
///
/// The catalogue is closed, so the engine resolves the policy once at
/// construction instead of carrying a trait object.
#[derive(Debug)]
pub enum Policy {
    /// First-come first-served.
    Fcfs(Fcfs),
    /// Last-come first-served.
    Lcfs(Lcfs),
    /// Shortest remaining time first.
    Srtf(Srtf),
    /// Round-robin.
    RoundRobin(RoundRobin),
    /// Priority.
    Prio(Prio),
    /// Preemptive priority.
    PrePrio(PrePrio),
}

impl Policy {
    /// Builds the configured policy.
    pub fn from_config(cfg: &SchedConfig) -> Self {
        match cfg.kind {
            SchedPolicyKind::Fcfs => Self::Fcfs(Fcfs::new()),
            SchedPolicyKind::Lcfs => Self::Lcfs(Lcfs::new()),
            SchedPolicyKind::Srtf => Self::Srtf(Srtf::new()),
            SchedPolicyKind::RoundRobin => Self::RoundRobin(RoundRobin::new()),
            SchedPolicyKind::Prio => Self::Prio(Prio::new(cfg.max_prio)),
            SchedPolicyKind::PrePrio => Self::PrePrio(PrePrio::new(cfg.max_prio)),
        }
    }
}

impl SchedulingPolicy for Policy {
    fn add(&mut self, pid: Pid, procs: &mut [Process]) {
        match self {
            Self::Fcfs(p) => p.add(pid, procs),
            Self::Lcfs(p) => p.add(pid, procs),
            Self::Srtf(p) => p.add(pid, procs),
            Self::RoundRobin(p) => p.add(pid, procs),
            Self::Prio(p) => p.add(pid, procs),
            Self::PrePrio(p) => p.add(pid, procs),
        }
    }

    fn next(&mut self) -> Option<Pid> {
        match self {
            Self::Fcfs(p) => p.next(),
            Self::Lcfs(p) => p.next(),
            Self::Srtf(p) => p.next(),
            Self::RoundRobin(p) => p.next(),
            Self::Prio(p) => p.next(),
            Self::PrePrio(p) => p.next(),
        }
    }

    fn preempts(&self) -> bool {
        match self {
            Self::PrePrio(p) => p.preempts(),
            _ => false,
        }
    }
}
