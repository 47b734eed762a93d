//! Disk Seek Policies.
//!
//! Implements the request-ordering disciplines for the per-tick disk
//! simulator.
//!
//! # Policies
//!
//! - `Fifo`: service in arrival order.
//! - `Sstf`: shortest seek time first.
//! - `Look`: elevator scan without overshooting the last request.
//! - `CLook`: upward-only scan, wrapping to the lowest pending track.
//! - `FLook`: LOOK over a frozen active queue, arrivals parked aside.
//!
//! Every selection scans from the queue head and replaces its candidate
//! only on a strictly shorter seek, so ties go to the earliest-queued
//! request. That tie-break is part of the observable behaviour.

/// Upward-only scan with wrap-around.
pub mod clook;

/// Arrival-order policy.
pub mod fifo;

/// Frozen-queue LOOK.
pub mod flook;

/// Elevator scan.
pub mod look;

/// Shortest-seek-time-first policy.
pub mod sstf;

pub use clook::CLook;
pub use fifo::Fifo;
pub use flook::FLook;
pub use look::Look;
pub use sstf::Sstf;

use crate::config::{DiskConfig, DiskPolicyKind};
use crate::iosched::request::IoRequest;

/// Capability set of a disk seek policy.
pub trait SeekPolicy {
    /// Accepts a request that has just arrived.
    fn admit(&mut self, request: IoRequest);

    /// Removes and returns the next request to service, given the current
    /// head position. Returns `None` only when nothing is pending.
    fn fetch(&mut self, head: i64) -> Option<IoRequest>;

    /// Number of requests waiting inside the policy (all queues).
    fn pending(&self) -> usize;
}

/// Statically dispatched policy selection.
#[derive(Debug)]
pub enum DiskPolicy {
    /// Arrival order.
    Fifo(Fifo),
    /// Shortest seek first.
    Sstf(Sstf),
    /// Elevator.
    Look(Look),
    /// Circular elevator.
    CLook(CLook),
    /// Frozen-queue elevator.
    FLook(FLook),
}

impl DiskPolicy {
    /// Builds the configured policy.
    pub fn from_config(cfg: &DiskConfig) -> Self {
        match cfg.kind {
            DiskPolicyKind::Fifo => Self::Fifo(Fifo::new()),
            DiskPolicyKind::Sstf => Self::Sstf(Sstf::new()),
            DiskPolicyKind::Look => Self::Look(Look::new()),
            DiskPolicyKind::CLook => Self::CLook(CLook::new()),
            DiskPolicyKind::FLook => Self::FLook(FLook::new()),
        }
    }
}

impl SeekPolicy for DiskPolicy {
    fn admit(&mut self, request: IoRequest) {
        match self {
            Self::Fifo(p) => p.admit(request),
            Self::Sstf(p) => p.admit(request),
            Self::Look(p) => p.admit(request),
            Self::CLook(p) => p.admit(request),
            Self::FLook(p) => p.admit(request),
        }
    }

    fn fetch(&mut self, head: i64) -> Option<IoRequest> {
        match self {
            Self::Fifo(p) => p.fetch(head),
            Self::Sstf(p) => p.fetch(head),
            Self::Look(p) => p.fetch(head),
            Self::CLook(p) => p.fetch(head),
            Self::FLook(p) => p.fetch(head),
        }
    }

    fn pending(&self) -> usize {
        match self {
            Self::Fifo(p) => p.pending(),
            Self::Sstf(p) => p.pending(),
            Self::Look(p) => p.pending(),
            Self::CLook(p) => p.pending(),
            Self::FLook(p) => p.pending(),
        }
    }
}

/// Index of the queued request nearest to `head` among those matching
/// `accept`, scanning from the front and keeping the first strict minimum.
pub(crate) fn nearest_matching<F>(
    queue: &std::collections::VecDeque<IoRequest>,
    head: i64,
    accept: F,
) -> Option<usize>
where
    F: Fn(&IoRequest) -> bool,
{
    let mut best: Option<(usize, i64)> = None;
    for (i, req) in queue.iter().enumerate() {
        if !accept(req) {
            continue;
        }
        let dist = (head - req.track).abs();
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}
