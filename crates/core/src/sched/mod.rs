//! Discrete-event CPU scheduling simulator.
//!
//! The engine advances simulated time by jumping to the next event in a
//! stable timestamp-ordered queue. Each event moves one process between the
//! CREATED/READY/RUNNING/BLOCKED states; the configured policy picks who
//! runs next whenever the CPU is free and the current instant has fully
//! drained. CPU and I/O burst lengths, and static priorities, are drawn
//! from the shared deterministic random stream.

/// Event queue and transition derivation.
pub mod event;
/// Scheduling policy catalogue.
pub mod policies;
/// Process model.
pub mod process;
/// Per-process and summary report.
pub mod report;

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::common::error::SimError;
use crate::common::rng::RandomSource;
use crate::common::trace::{TraceReader, parse_fields};
use crate::config::SchedConfig;
use crate::sched::event::{Event, EventQueue, Transition};
use crate::sched::policies::{Policy, SchedulingPolicy};
use crate::sched::process::{Pid, ProcState, Process};

/// Loads the process table from a trace: one process per line,
/// `arrival total_cpu max_cpu_burst max_io_burst`.
pub fn load_processes<R: BufRead>(reader: R) -> Result<Vec<Process>, SimError> {
    let mut trace = TraceReader::new(reader);
    let mut procs = Vec::new();
    while let Some(line) = trace.next_record()? {
        let [arrival, total, max_cb, max_ib] = parse_fields("process", &line)?;
        if arrival < 0 || total <= 0 || max_cb <= 0 || max_ib <= 0 {
            return Err(SimError::malformed("process", line));
        }
        procs.push(Process::new(
            procs.len(),
            arrival as u64,
            total as u64,
            max_cb as u32,
            max_ib as u32,
        ));
    }
    Ok(procs)
}

/// The discrete-event scheduling engine.
///
/// Owns every piece of mutable simulation state: the process arena, the
/// event queue, the policy's run queues, the shared random stream, and the
/// global accounting counters.
#[derive(Debug)]
pub struct SchedSim {
    cfg: SchedConfig,
    policy: Policy,
    /// Process arena, indexed by pid.
    pub procs: Vec<Process>,
    /// Shared deterministic random stream.
    pub rng: RandomSource,
    events: EventQueue,
    now: u64,
    current: Option<Pid>,
    call_scheduler: bool,
    /// Processes currently BLOCKED; drives union-of-intervals I/O time.
    io_blocked: usize,
    io_start: u64,
    /// Total time with at least one process performing I/O.
    pub total_io_time: u64,
    final_time: u64,
}

impl SchedSim {
    /// Builds the engine: assigns static priorities (one RNG draw per
    /// process, in pid order) and seeds the arrival events.
    pub fn new(cfg: SchedConfig, mut procs: Vec<Process>, mut rng: RandomSource) -> Self {
        let mut events = EventQueue::new();
        for p in &mut procs {
            p.static_prio = rng.in_burst(cfg.max_prio as u32);
            p.dynamic_prio = p.static_prio as i32 - 1;
            events.push(Event {
                timestamp: p.arrival_time,
                pid: p.pid,
                old_state: ProcState::Created,
                new_state: ProcState::Ready,
            });
        }
        let policy = Policy::from_config(&cfg);
        Self {
            cfg,
            policy,
            procs,
            rng,
            events,
            now: 0,
            current: None,
            call_scheduler: false,
            io_blocked: 0,
            io_start: 0,
            total_io_time: 0,
            final_time: 0,
        }
    }

    /// Runs the simulation to completion and returns the finishing time of
    /// the last process. The optional per-transition trace goes to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<u64, SimError> {
        while let Some(event) = self.events.pop() {
            let pid = event.pid;
            self.now = event.timestamp;
            let transition = event.transition();
            let time_in_prev = self.now - self.procs[pid].state_ts;
            self.procs[pid].state_ts = self.now;
            trace!(time = self.now, pid, ?transition, "event");

            if self.cfg.verbose {
                write!(
                    out,
                    "{} {} {}: {} -> {}",
                    self.now, pid, time_in_prev, event.old_state, event.new_state
                )?;
            }

            match transition {
                Transition::ToReady => self.on_ready(pid, event.old_state, out)?,
                Transition::ToPreempt => self.on_preempt(pid, time_in_prev, out)?,
                Transition::ToRun => self.on_run(pid, time_in_prev, out)?,
                Transition::ToBlock => self.on_block(pid, time_in_prev, out)?,
            }

            if self.call_scheduler {
                // Drain every event at this instant before picking a runner,
                // so same-time unblocks and preemptions cannot race.
                if self.events.next_time() == Some(self.now) {
                    continue;
                }
                self.call_scheduler = false;
                if self.current.is_none() {
                    self.dispatch_next();
                }
            }
        }
        self.final_time = self.now;
        Ok(self.now)
    }

    /// Writes the policy header, per-process lines, and SUM line.
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<(), SimError> {
        report::write_report(out, &self.cfg, &self.procs, self.final_time, self.total_io_time)
    }

    fn on_ready<W: Write>(
        &mut self,
        pid: Pid,
        old_state: ProcState,
        out: &mut W,
    ) -> Result<(), SimError> {
        // Union-of-intervals I/O accounting: overlapping I/O counts once.
        if old_state == ProcState::Blocked {
            self.io_blocked -= 1;
            if self.io_blocked == 0 {
                self.total_io_time += self.now - self.io_start;
            }
        }

        if self.cfg.verbose {
            let p = &self.procs[pid];
            writeln!(
                out,
                " cb={} rem={} prio={}",
                p.cpu_burst, p.remaining_cpu_time, p.dynamic_prio
            )?;
        }

        let p = &mut self.procs[pid];
        p.dynamic_prio = p.static_prio as i32 - 1;

        if self.policy.preempts() {
            self.try_preempt_runner(pid);
        }

        self.policy.add(pid, &mut self.procs);
        self.call_scheduler = true;
        Ok(())
    }

    /// Cancels the runner's stale future event and schedules an immediate
    /// preemption, if the newly READY process outranks the runner. When no
    /// future event exists the runner was already due to yield at this
    /// instant, and nothing is added.
    fn try_preempt_runner(&mut self, ready_pid: Pid) {
        let Some(runner) = self.current else {
            return;
        };
        if self.procs[ready_pid].dynamic_prio <= self.procs[runner].dynamic_prio {
            return;
        }
        if self.events.remove_future(runner, self.now) {
            debug!(runner, by = ready_pid, time = self.now, "preempting runner");
            self.events.push(Event {
                timestamp: self.now,
                pid: runner,
                old_state: ProcState::Running,
                new_state: ProcState::Ready,
            });
        }
    }

    fn on_preempt<W: Write>(
        &mut self,
        pid: Pid,
        time_in_prev: u64,
        out: &mut W,
    ) -> Result<(), SimError> {
        let p = &mut self.procs[pid];
        p.remaining_cpu_time -= time_in_prev;
        p.cpu_burst -= time_in_prev;

        if self.cfg.verbose {
            writeln!(
                out,
                " cb={} rem={} prio={}",
                p.cpu_burst, p.remaining_cpu_time, p.dynamic_prio
            )?;
        }

        self.procs[pid].dynamic_prio -= 1;
        self.policy.add(pid, &mut self.procs);
        self.current = None;
        self.call_scheduler = true;
        Ok(())
    }

    fn on_run<W: Write>(
        &mut self,
        pid: Pid,
        time_in_prev: u64,
        out: &mut W,
    ) -> Result<(), SimError> {
        if self.cfg.verbose {
            let p = &self.procs[pid];
            writeln!(
                out,
                " cb={} rem={} prio={}",
                p.cpu_burst, p.remaining_cpu_time, p.dynamic_prio
            )?;
        }

        let quantum = u64::from(self.cfg.quantum);
        let p = &mut self.procs[pid];
        p.cpu_waiting_time += time_in_prev;
        let (fire_at, new_state) = if p.cpu_burst <= quantum {
            (self.now + p.cpu_burst, ProcState::Blocked)
        } else {
            (self.now + quantum, ProcState::Ready)
        };
        self.events.push(Event {
            timestamp: fire_at,
            pid,
            old_state: ProcState::Running,
            new_state,
        });
        Ok(())
    }

    fn on_block<W: Write>(
        &mut self,
        pid: Pid,
        time_in_prev: u64,
        out: &mut W,
    ) -> Result<(), SimError> {
        let p = &mut self.procs[pid];
        p.remaining_cpu_time -= time_in_prev;
        p.cpu_burst -= time_in_prev;

        if p.remaining_cpu_time == 0 {
            p.finishing_time = self.now;
            p.turnaround_time = self.now - p.arrival_time;
            if self.cfg.verbose {
                writeln!(out, " Done")?;
            }
        } else {
            let io_burst = u64::from(self.rng.in_burst(self.procs[pid].max_io_burst));
            self.io_blocked += 1;
            if self.io_blocked == 1 {
                self.io_start = self.now;
            }
            let p = &mut self.procs[pid];
            p.io_burst = io_burst;
            if self.cfg.verbose {
                writeln!(out, " ib={} rem={}", p.io_burst, p.remaining_cpu_time)?;
            }
            p.total_io_time += io_burst;
            self.events.push(Event {
                timestamp: self.now + io_burst,
                pid,
                old_state: ProcState::Blocked,
                new_state: ProcState::Ready,
            });
        }

        self.current = None;
        self.call_scheduler = true;
        Ok(())
    }

    /// Asks the policy for the next runner; draws a fresh CPU burst (capped
    /// at the remaining requirement) when the previous one is spent.
    fn dispatch_next(&mut self) {
        let Some(pid) = self.policy.next() else {
            return;
        };
        let max_burst = self.procs[pid].max_cpu_burst;
        let p = &mut self.procs[pid];
        if p.cpu_burst == 0 {
            p.cpu_burst = u64::from(self.rng.in_burst(max_burst)).min(p.remaining_cpu_time);
        }
        self.current = Some(pid);
        self.events.push(Event {
            timestamp: self.now,
            pid,
            old_state: ProcState::Ready,
            new_state: ProcState::Running,
        });
    }
}
