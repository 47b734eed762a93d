//! Request model for the disk I/O simulator.

/// One I/O request from the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoRequest {
    /// Trace order; also the report order.
    pub id: usize,
    /// Tick at which the request enters the scheduler.
    pub arrival: u64,
    /// Track the head must reach.
    pub track: i64,
}

/// Completion record for one request, kept for the final report.
///
/// `start` and `end` are filled during the run; every request completes
/// before the simulation terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct IoInfo {
    /// Arrival tick, copied from the request.
    pub arrival: u64,
    /// Tick the request became the active request.
    pub start: u64,
    /// Tick the head reached the target track.
    pub end: u64,
}
