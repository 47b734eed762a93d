//! LOOK (Elevator) Policy.
//!
//! Sweeps in one direction, servicing the nearest request ahead of the head
//! (or directly under it), and reverses only when nothing is left in the
//! travel direction. Unlike SCAN it never runs to the disk edge.

use std::collections::VecDeque;

use super::{SeekPolicy, nearest_matching};
use crate::iosched::request::IoRequest;

/// LOOK policy state. Direction starts upward.
#[derive(Debug)]
pub struct Look {
    queue: VecDeque<IoRequest>,
    up: bool,
}

impl Look {
    /// Creates an empty LOOK queue sweeping upward.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            up: true,
        }
    }

    /// Picks the nearest in-direction request, flipping direction when the
    /// current sweep is exhausted. The post-flip fallback to the queue head
    /// is unreachable for a non-empty queue: every remaining request lies
    /// in the reversed direction.
    pub(crate) fn select(queue: &VecDeque<IoRequest>, up: &mut bool, head: i64) -> Option<usize> {
        if queue.is_empty() {
            return None;
        }
        let ahead =
            nearest_matching(queue, head, |r| r.track == head || (head < r.track) == *up);
        if ahead.is_some() {
            return ahead;
        }
        *up = !*up;
        let reversed =
            nearest_matching(queue, head, |r| r.track == head || (head < r.track) == *up);
        Some(reversed.unwrap_or(0))
    }
}

impl Default for Look {
    fn default() -> Self {
        Self::new()
    }
}

impl SeekPolicy for Look {
    fn admit(&mut self, request: IoRequest) {
        self.queue.push_back(request);
    }

    fn fetch(&mut self, head: i64) -> Option<IoRequest> {
        let idx = Self::select(&self.queue, &mut self.up, head)?;
        self.queue.remove(idx)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
