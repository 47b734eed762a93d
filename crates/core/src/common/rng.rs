//! Deterministic file-backed random source.
//!
//! All randomness in the suite (static priorities, CPU and I/O bursts, the
//! Random pager's frame picks) is served from one ordered stream of
//! integers read from a file. A single cursor advances by exactly one per
//! drawn value and wraps to the start at the end of the stream. Any change
//! to draw ordering changes simulation output, so consumers must draw in
//! strict program order.
//!
//! File format: the first integer is the count of values that follow; the
//! remaining integers are the stream.

use std::fs;
use std::path::Path;

use crate::common::error::SimError;

/// Ordered integer stream with a single wrapping cursor.
#[derive(Debug, Clone)]
pub struct RandomSource {
    values: Vec<u32>,
    cursor: usize,
    draws: u64,
}

impl RandomSource {
    /// Loads a random-number file.
    ///
    /// The declared count bounds the stream: trailing extra integers are
    /// ignored, and a file with fewer values than declared is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
        Self::parse(&text)
    }

    /// Parses the random-number file format from a string.
    pub fn parse(text: &str) -> Result<Self, SimError> {
        let mut ints = text.split_whitespace();
        let count: usize = ints
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| SimError::malformed("random-number count", text.lines().next().unwrap_or("")))?;
        if count == 0 {
            return Err(SimError::BadValue {
                what: "random-number count",
                value: count.to_string(),
            });
        }
        let mut values = Vec::with_capacity(count);
        for token in ints.take(count) {
            let v = token
                .parse::<u32>()
                .map_err(|_| SimError::malformed("random number", token))?;
            values.push(v);
        }
        if values.len() < count {
            return Err(SimError::BadValue {
                what: "random-number count",
                value: format!("{count} declared, {} present", values.len()),
            });
        }
        Ok(Self {
            values,
            cursor: 0,
            draws: 0,
        })
    }

    /// Builds a source directly from values. Test fixture constructor.
    pub fn from_values(values: Vec<u32>) -> Self {
        debug_assert!(!values.is_empty());
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// Draws the next raw value and advances the cursor, wrapping at the end.
    fn next_value(&mut self) -> u32 {
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.draws += 1;
        v
    }

    /// Draws a value scaled into `[1, burst]` as `1 + (value mod burst)`.
    ///
    /// Used for CPU bursts, I/O bursts, and static priority assignment.
    pub fn in_burst(&mut self, burst: u32) -> u32 {
        1 + self.next_value() % burst
    }

    /// Draws a zero-based index in `[0, n)` as `value mod n`.
    ///
    /// Used by the Random pager's frame selection.
    pub fn index(&mut self, n: usize) -> usize {
        self.next_value() as usize % n
    }

    /// Current cursor position within the stream (wraps at the end).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total values drawn so far. Advances by exactly one per draw.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Number of values in the stream.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stream is empty. Always false for a loaded source.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
