//! Disk I/O scheduling simulator.
//!
//! A per-tick loop over one disk head. Each tick admits due arrivals,
//! completes the active request if the head has reached its track, asks the
//! seek policy for a new active request when idle, and moves the head one
//! track toward the target. A freshly fetched request already under the
//! head completes within the same tick.

/// Seek policy catalogue.
pub mod policies;
/// Request and completion records.
pub mod request;
/// Request table and summary report.
pub mod report;

use std::collections::VecDeque;
use std::io::BufRead;

use tracing::trace;

use crate::common::error::SimError;
use crate::common::trace::{TraceReader, parse_fields};
use crate::config::DiskConfig;
use crate::iosched::policies::{DiskPolicy, SeekPolicy};
use crate::iosched::request::{IoInfo, IoRequest};

/// Loads the request stream: one `arrival_time target_track` pair per
/// non-comment line. Arrival times must be nondecreasing; the tick loop
/// admits from the front of the stream only.
pub fn load_requests<R: BufRead>(reader: R) -> Result<Vec<IoRequest>, SimError> {
    let mut trace = TraceReader::new(reader);
    let mut requests: Vec<IoRequest> = Vec::new();
    while let Some(line) = trace.next_record()? {
        let [arrival, track] = parse_fields("request", &line)?;
        if arrival < 0 || track < 0 {
            return Err(SimError::malformed("request", line));
        }
        if requests.last().is_some_and(|r| r.arrival > arrival as u64) {
            return Err(SimError::malformed("request", line));
        }
        requests.push(IoRequest {
            id: requests.len(),
            arrival: arrival as u64,
            track,
        });
    }
    Ok(requests)
}

/// Aggregate counters for the SUM line.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStats {
    /// Ticks spent with the head in motion.
    pub total_movement: u64,
    /// Same as movement; kept separate because utilisation is defined
    /// over busy ticks, movement over traversed tracks.
    pub busy_ticks: u64,
    /// Sum of `end - arrival` over completed requests.
    pub total_turnaround: u64,
    /// Sum of `start - arrival` over dispatched requests.
    pub total_wait: u64,
    /// Largest single `start - arrival`.
    pub max_wait: u64,
    /// Requests completed.
    pub completed: usize,
}

/// The per-tick disk head engine.
#[derive(Debug)]
pub struct DiskSim {
    policy: DiskPolicy,
    arrivals: VecDeque<IoRequest>,
    /// Completion table, indexed by request id.
    pub infos: Vec<IoInfo>,
    /// Aggregate counters.
    pub stats: DiskStats,
    now: u64,
    head: i64,
    active: Option<IoRequest>,
}

impl DiskSim {
    /// Builds the engine over a trace-ordered request list. The head starts
    /// at track 0.
    pub fn new(cfg: &DiskConfig, requests: Vec<IoRequest>) -> Self {
        let infos = requests
            .iter()
            .map(|r| IoInfo {
                arrival: r.arrival,
                ..IoInfo::default()
            })
            .collect();
        Self {
            policy: DiskPolicy::from_config(cfg),
            arrivals: requests.into(),
            infos,
            stats: DiskStats::default(),
            now: 0,
            head: 0,
            active: None,
        }
    }

    /// Runs the simulation until every request has completed; returns the
    /// total elapsed ticks.
    pub fn run(&mut self) -> u64 {
        loop {
            // (a) Admit every arrival due this tick.
            while let Some(req) = self.arrivals.front().copied() {
                if req.arrival != self.now {
                    break;
                }
                let _ = self.arrivals.pop_front();
                trace!(id = req.id, track = req.track, time = self.now, "admit");
                self.policy.admit(req);
            }

            // (b) Complete the active request once the head reaches it.
            if let Some(req) = self.active {
                if req.track == self.head {
                    self.complete(req);
                    self.active = None;
                }
            }

            // (c) Idle head: terminate when drained, else fetch.
            if self.active.is_none() {
                if self.arrivals.is_empty() && self.policy.pending() == 0 {
                    return self.now;
                }
                if self.policy.pending() > 0 {
                    if let Some(req) = self.policy.fetch(self.head) {
                        let wait = self.now - req.arrival;
                        self.infos[req.id].start = self.now;
                        self.stats.total_wait += wait;
                        self.stats.max_wait = self.stats.max_wait.max(wait);
                        self.active = Some(req);
                    }
                }
            }

            // (d) Seek one track toward the target; a request already under
            // the head completes now, without consuming a tick.
            if let Some(req) = self.active {
                if req.track == self.head {
                    self.complete(req);
                    self.active = None;
                    continue;
                }
                self.stats.busy_ticks += 1;
                self.head += if req.track > self.head { 1 } else { -1 };
                self.stats.total_movement += 1;
            }

            self.now += 1;
        }
    }

    fn complete(&mut self, req: IoRequest) {
        self.infos[req.id].end = self.now;
        self.stats.total_turnaround += self.now - req.arrival;
        self.stats.completed += 1;
        trace!(id = req.id, time = self.now, "complete");
    }

    /// Current head position.
    pub fn head(&self) -> i64 {
        self.head
    }

    /// Writes the request table and SUM line.
    pub fn write_report<W: std::io::Write>(&self, out: &mut W) -> Result<(), SimError> {
        report::write_report(out, &self.infos, self.now, &self.stats)
    }
}
