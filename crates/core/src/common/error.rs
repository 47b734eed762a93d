//! Error definitions for the simulator suite.
//!
//! One error type covers every fault a simulation can hit *outside* the
//! simulated machine: unreadable files, malformed trace records, unknown
//! policy symbols. Faults *inside* the simulation (segmentation violations,
//! write-protection traps) are observable behaviour, accounted and reported
//! by the engines, and never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Faults raised while loading inputs or driving a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A trace, random-number, or configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing simulator output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// An input line did not match the expected record shape.
    #[error("malformed {what} record: {line:?}")]
    Malformed {
        /// Which record kind was being parsed.
        what: &'static str,
        /// The offending line, verbatim.
        line: String,
    },

    /// A policy selector letter outside the documented set.
    #[error("unknown {family} spec: -{flag}{{{symbols}}}")]
    UnknownPolicy {
        /// Simulator family ("scheduler", "algorithm", "pager").
        family: &'static str,
        /// The CLI flag the selector rides on.
        flag: char,
        /// The accepted symbol set, for the diagnostic.
        symbols: &'static str,
    },

    /// A numeric parameter outside its documented range.
    #[error("invalid {what}: {value}")]
    BadValue {
        /// Which parameter was out of range.
        what: &'static str,
        /// The rejected value, verbatim.
        value: String,
    },
}

impl SimError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a malformed-record error from the offending line.
    pub fn malformed(what: &'static str, line: impl Into<String>) -> Self {
        Self::Malformed {
            what,
            line: line.into(),
        }
    }
}
