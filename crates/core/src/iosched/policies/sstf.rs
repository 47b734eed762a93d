//! Shortest-Seek-Time-First Policy.
//!
//! Always services the pending request closest to the current head
//! position. Ties go to the earliest-queued request. Minimises individual
//! seeks at the price of possible starvation at the extremes.

use std::collections::VecDeque;

use super::{SeekPolicy, nearest_matching};
use crate::iosched::request::IoRequest;

/// SSTF policy state.
#[derive(Debug, Default)]
pub struct Sstf {
    queue: VecDeque<IoRequest>,
}

impl Sstf {
    /// Creates an empty SSTF queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeekPolicy for Sstf {
    fn admit(&mut self, request: IoRequest) {
        self.queue.push_back(request);
    }

    fn fetch(&mut self, head: i64) -> Option<IoRequest> {
        let idx = nearest_matching(&self.queue, head, |_| true)?;
        self.queue.remove(idx)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
