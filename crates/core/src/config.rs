//! Configuration for the simulator suite.
//!
//! Each simulator is parameterised by a small config struct:
//! 1. **Kinds:** enums naming the policy catalogue of each simulator.
//! 2. **Symbols:** parsers for the one-letter CLI selectors
//!    (`-sR2:5`, `-sN`, `-ac`, `-oOPFS`).
//! 3. **Data:** every config derives `Deserialize`, so simulations can be
//!    driven from stored configuration as well as from flags.

use serde::Deserialize;

use crate::common::error::SimError;

/// Baseline parameters used when a flag is omitted.
pub mod defaults {
    /// Quantum for non-preemptive schedulers; effectively never expires.
    pub const UNLIMITED_QUANTUM: u32 = 10_000;

    /// Priority levels when `maxprio` is not given (and always, for RR).
    pub const DEFAULT_MAX_PRIO: usize = 4;

    /// Frame-table size when `-f` is omitted.
    pub const DEFAULT_FRAMES: usize = 16;

    /// Hard ceiling on the frame table; the PTE frame field is 7 bits.
    pub const FRAME_LIMIT: usize = 128;
}

/// CPU scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SchedPolicyKind {
    /// First-come first-served.
    Fcfs,
    /// Last-come first-served.
    Lcfs,
    /// Shortest remaining time first.
    Srtf,
    /// Round-robin with a quantum.
    RoundRobin,
    /// Priority with dual active/expired queues.
    Prio,
    /// Preemptive priority.
    PrePrio,
}

/// CPU simulator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedConfig {
    /// Which scheduling policy runs the simulation.
    pub kind: SchedPolicyKind,
    /// Quantum in time units; `UNLIMITED_QUANTUM` for FCFS/LCFS/SRTF.
    pub quantum: u32,
    /// Number of priority levels (PRIO/PREPRIO queue arrays).
    pub max_prio: usize,
    /// Emit the per-transition trace.
    pub verbose: bool,
}

impl Default for SchedConfig {
    fn default() -> Self {
        Self {
            kind: SchedPolicyKind::Fcfs,
            quantum: defaults::UNLIMITED_QUANTUM,
            max_prio: defaults::DEFAULT_MAX_PRIO,
            verbose: false,
        }
    }
}

impl SchedConfig {
    /// Parses a scheduler spec as passed to `-s`:
    /// `F`, `L`, `S`, `R<q>`, `P<q>[:<maxprio>]`, `E<q>[:<maxprio>]`.
    ///
    /// RR accepts but overrides `maxprio`; it always runs with the default
    /// level count because it shares admission code with PRIO.
    pub fn parse_spec(spec: &str) -> Result<Self, SimError> {
        let mut cfg = Self::default();
        let Some(symbol) = spec.chars().next() else {
            return Err(unknown_scheduler());
        };
        let rest = &spec[symbol.len_utf8()..];
        match symbol {
            'F' => cfg.kind = SchedPolicyKind::Fcfs,
            'L' => cfg.kind = SchedPolicyKind::Lcfs,
            'S' => cfg.kind = SchedPolicyKind::Srtf,
            'R' => {
                cfg.kind = SchedPolicyKind::RoundRobin;
                (cfg.quantum, _) = parse_quantum_spec(rest)?;
                cfg.max_prio = defaults::DEFAULT_MAX_PRIO;
            }
            'P' => {
                cfg.kind = SchedPolicyKind::Prio;
                (cfg.quantum, cfg.max_prio) = parse_quantum_spec(rest)?;
            }
            'E' => {
                cfg.kind = SchedPolicyKind::PrePrio;
                (cfg.quantum, cfg.max_prio) = parse_quantum_spec(rest)?;
            }
            _ => return Err(unknown_scheduler()),
        }
        Ok(cfg)
    }

    /// Header name printed above the per-process report.
    pub fn name(&self) -> String {
        match self.kind {
            SchedPolicyKind::Fcfs => "FCFS".to_owned(),
            SchedPolicyKind::Lcfs => "LCFS".to_owned(),
            SchedPolicyKind::Srtf => "SRTF".to_owned(),
            SchedPolicyKind::RoundRobin => format!("RR {}", self.quantum),
            SchedPolicyKind::Prio => format!("PRIO {}", self.quantum),
            SchedPolicyKind::PrePrio => format!("PREPRIO {}", self.quantum),
        }
    }
}

fn unknown_scheduler() -> SimError {
    SimError::UnknownPolicy {
        family: "Scheduler",
        flag: 's',
        symbols: "FLSRPE",
    }
}

/// Parses `<q>[:<maxprio>]`; `maxprio` defaults when absent.
fn parse_quantum_spec(rest: &str) -> Result<(u32, usize), SimError> {
    let (q_text, prio_text) = match rest.split_once(':') {
        Some((q, p)) => (q, Some(p)),
        None => (rest, None),
    };
    let quantum: u32 = q_text.parse().map_err(|_| SimError::BadValue {
        what: "quantum",
        value: rest.to_owned(),
    })?;
    if quantum == 0 {
        return Err(SimError::BadValue {
            what: "quantum",
            value: rest.to_owned(),
        });
    }
    let max_prio = match prio_text {
        Some(p) => p.parse().map_err(|_| SimError::BadValue {
            what: "maxprio",
            value: rest.to_owned(),
        })?,
        None => defaults::DEFAULT_MAX_PRIO,
    };
    if max_prio == 0 {
        return Err(SimError::BadValue {
            what: "maxprio",
            value: rest.to_owned(),
        });
    }
    Ok((quantum, max_prio))
}

/// Disk scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DiskPolicyKind {
    /// Service in arrival order.
    Fifo,
    /// Shortest seek time first.
    Sstf,
    /// Elevator without edge overshoot.
    Look,
    /// One-directional LOOK with wrap-around.
    CLook,
    /// LOOK over frozen active/add queues.
    FLook,
}

impl DiskPolicyKind {
    /// Parses the `-s` selector: `N`, `S`, `L`, `C`, `F`.
    pub fn from_symbol(symbol: char) -> Result<Self, SimError> {
        match symbol {
            'N' => Ok(Self::Fifo),
            'S' => Ok(Self::Sstf),
            'L' => Ok(Self::Look),
            'C' => Ok(Self::CLook),
            'F' => Ok(Self::FLook),
            _ => Err(SimError::UnknownPolicy {
                family: "Algorithm",
                flag: 's',
                symbols: "NSLCF",
            }),
        }
    }
}

/// Disk simulator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    /// Which seek policy orders the request queue.
    pub kind: DiskPolicyKind,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            kind: DiskPolicyKind::Fifo,
        }
    }
}

/// Frame-replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PagerKind {
    /// Circular hand over the frame table.
    Fifo,
    /// Frame drawn from the shared random stream.
    Random,
    /// Second chance via REFERENCED bits.
    Clock,
    /// Enhanced second chance / NRU classes.
    SecondChance,
    /// 32-bit aging registers.
    Aging,
    /// Working set with a fixed window.
    WorkingSet,
}

impl PagerKind {
    /// Parses the `-a` selector: `f`, `r`, `c`, `e`, `a`, `w`.
    pub fn from_symbol(symbol: char) -> Result<Self, SimError> {
        match symbol {
            'f' => Ok(Self::Fifo),
            'r' => Ok(Self::Random),
            'c' => Ok(Self::Clock),
            'e' => Ok(Self::SecondChance),
            'a' => Ok(Self::Aging),
            'w' => Ok(Self::WorkingSet),
            _ => Err(SimError::UnknownPolicy {
                family: "Algorithm",
                flag: 'a',
                symbols: "frceaw",
            }),
        }
    }
}

/// MMU simulator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MmuConfig {
    /// Frame-table size, `1..=FRAME_LIMIT`.
    pub frames: usize,
    /// Which pager selects victim frames.
    pub pager: PagerKind,
    /// `O`: per-operation trace.
    pub show_ops: bool,
    /// `P`: final page tables.
    pub show_page_tables: bool,
    /// `F`: final frame table.
    pub show_frame_table: bool,
    /// `S`: per-process statistics and the TOTALCOST line.
    pub show_summary: bool,
}

impl Default for MmuConfig {
    fn default() -> Self {
        Self {
            frames: defaults::DEFAULT_FRAMES,
            pager: PagerKind::Fifo,
            show_ops: false,
            show_page_tables: false,
            show_frame_table: false,
            show_summary: false,
        }
    }
}

impl MmuConfig {
    /// Validates the frame count against the 7-bit frame field.
    pub fn with_frames(mut self, frames: usize) -> Result<Self, SimError> {
        if frames == 0 || frames > defaults::FRAME_LIMIT {
            return Err(SimError::BadValue {
                what: "frame count",
                value: frames.to_string(),
            });
        }
        self.frames = frames;
        Ok(self)
    }

    /// Applies an `-o` option string; letters outside `OPFS` are ignored.
    pub fn apply_output_flags(&mut self, flags: &str) {
        for c in flags.chars() {
            match c {
                'O' => self.show_ops = true,
                'P' => self.show_page_tables = true,
                'F' => self.show_frame_table = true,
                'S' => self.show_summary = true,
                _ => {}
            }
        }
    }
}
