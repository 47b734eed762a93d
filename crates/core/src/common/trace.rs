//! Comment-skipping trace reader.
//!
//! Trace files interleave records with `#`-prefixed comment lines. The
//! reader yields records lazily so instruction streams of unbounded length
//! never live in memory at once.

use std::io::BufRead;

use crate::common::error::SimError;

/// Lazy line source that skips comment lines.
#[derive(Debug)]
pub struct TraceReader<R> {
    inner: R,
    buf: String,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
        }
    }

    /// Returns the next non-comment, non-blank record, or `None` at end of
    /// input. Lines whose first byte is `#` are skipped; trailing newline
    /// characters are stripped.
    pub fn next_record(&mut self) -> Result<Option<String>, std::io::Error> {
        loop {
            self.buf.clear();
            let n = self.inner.read_line(&mut self.buf)?;
            if n == 0 {
                return Ok(None);
            }
            let line = self.buf.trim_end_matches(['\n', '\r']);
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            return Ok(Some(line.to_owned()));
        }
    }
}

/// Parses exactly `N` whitespace-separated integer fields from a record.
pub fn parse_fields<const N: usize>(
    what: &'static str,
    line: &str,
) -> Result<[i64; N], SimError> {
    let mut out = [0i64; N];
    let mut fields = line.split_whitespace();
    for slot in &mut out {
        let token = fields
            .next()
            .ok_or_else(|| SimError::malformed(what, line))?;
        *slot = token
            .parse()
            .map_err(|_| SimError::malformed(what, line))?;
    }
    Ok(out)
}
