//! Arrival-Order (FIFO) Seek Policy.
//!
//! Services requests strictly in arrival order, paying whatever seek each
//! one costs. The baseline the smarter policies are measured against.

use std::collections::VecDeque;

use super::SeekPolicy;
use crate::iosched::request::IoRequest;

/// FIFO policy state.
#[derive(Debug, Default)]
pub struct Fifo {
    queue: VecDeque<IoRequest>,
}

impl Fifo {
    /// Creates an empty FIFO queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeekPolicy for Fifo {
    fn admit(&mut self, request: IoRequest) {
        self.queue.push_back(request);
    }

    fn fetch(&mut self, _head: i64) -> Option<IoRequest> {
        self.queue.pop_front()
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
