//! Deterministic operating-system simulator suite.
//!
//! This crate implements three trace-driven simulators that share one
//! discipline (*event source, state-machine transition, policy-driven
//! selection, accounting*):
//! 1. **CPU scheduling:** a discrete-event engine over a four-state process
//!    lifecycle with six pluggable policies ([`sched`]).
//! 2. **Disk I/O scheduling:** a per-tick head-position simulator with five
//!    seek policies ([`iosched`]).
//! 3. **Demand paging:** a frame-replacement engine over per-process page
//!    tables with six pluggable pagers ([`mmu`]).
//!
//! Every source of randomness is a single file-backed integer stream
//! ([`common::rng::RandomSource`]), so identical inputs produce
//! byte-identical output. Reports and optional per-event traces are written
//! to an explicit [`std::io::Write`] sink; the `tracing` facade carries
//! operator diagnostics only and never simulator output.

/// Shared infrastructure: deterministic RNG, trace reading, errors.
pub mod common;
/// Simulator configuration: policy kinds, quanta, frame counts, output flags.
pub mod config;
/// Disk I/O scheduling simulator.
pub mod iosched;
/// Virtual-memory paging simulator.
pub mod mmu;
/// Discrete-event CPU scheduling simulator.
pub mod sched;

pub use crate::common::error::SimError;
pub use crate::common::rng::RandomSource;
pub use crate::config::{DiskConfig, MmuConfig, SchedConfig};
