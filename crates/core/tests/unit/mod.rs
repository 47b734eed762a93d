//! # Unit Tests
//!
//! Organised per subsystem, mirroring the library's module tree.

/// Tests for shared infrastructure: RNG, trace reader, configuration.
pub mod common;

/// Tests for the disk I/O scheduling simulator.
pub mod iosched;

/// Tests for the paging simulator.
pub mod mmu;

/// Tests for the CPU scheduling simulator.
pub mod sched;
