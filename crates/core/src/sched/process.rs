//! Process model for the CPU scheduling simulator.

use std::fmt;

/// Index into the engine's process arena.
pub type Pid = usize;

/// The four lifecycle states.
///
/// CREATED appears only as the source state of an arrival event; a process
/// never re-enters it. Termination is not a state: a process that drains
/// its CPU requirement simply stops generating events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    /// Loaded from the trace, not yet arrived.
    Created,
    /// Waiting in a run queue.
    Ready,
    /// Holding the CPU.
    Running,
    /// Performing I/O.
    Blocked,
}

impl fmt::Display for ProcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "CREATED",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Blocked => "BLOCKED",
        })
    }
}

/// One simulated process and its accounting.
#[derive(Debug, Clone)]
pub struct Process {
    /// Position in the process arena; also the report order.
    pub pid: Pid,
    /// Trace arrival time.
    pub arrival_time: u64,
    /// Total CPU requirement from the trace.
    pub total_cpu_time: u64,
    /// Upper bound for drawn CPU bursts.
    pub max_cpu_burst: u32,
    /// Upper bound for drawn I/O bursts.
    pub max_io_burst: u32,
    /// Remainder of the current CPU burst; 0 forces a fresh draw.
    pub cpu_burst: u64,
    /// The most recently drawn I/O burst.
    pub io_burst: u64,
    /// CPU time still owed. Reaching 0 at the end of a burst terminates.
    pub remaining_cpu_time: u64,
    /// Randomly assigned priority in `[1, max_prio]`.
    pub static_prio: u32,
    /// Current level; decays on quantum expiry, may reach −1.
    pub dynamic_prio: i32,
    /// Entry time of the current state, for per-state accounting.
    pub state_ts: u64,
    /// Simulated time of termination.
    pub finishing_time: u64,
    /// `finishing_time - arrival_time`.
    pub turnaround_time: u64,
    /// Sum of this process's drawn I/O bursts.
    pub total_io_time: u64,
    /// Time spent READY in a run queue.
    pub cpu_waiting_time: u64,
}

impl Process {
    /// Builds a process from one trace record.
    pub fn new(
        pid: Pid,
        arrival_time: u64,
        total_cpu_time: u64,
        max_cpu_burst: u32,
        max_io_burst: u32,
    ) -> Self {
        Self {
            pid,
            arrival_time,
            total_cpu_time,
            max_cpu_burst,
            max_io_burst,
            cpu_burst: 0,
            io_burst: 0,
            remaining_cpu_time: total_cpu_time,
            static_prio: 0,
            dynamic_prio: 0,
            state_ts: arrival_time,
            finishing_time: 0,
            turnaround_time: 0,
            total_io_time: 0,
            cpu_waiting_time: 0,
        }
    }
}
