//! C-LOOK (Circular LOOK) Policy.
//!
//! Scans upward only: services the nearest request at or above the head,
//! and when none remains, wraps to the pending request with the lowest
//! track. One-directional service keeps wait times uniform across tracks.

use std::collections::VecDeque;

use super::{SeekPolicy, nearest_matching};
use crate::iosched::request::IoRequest;

/// C-LOOK policy state.
#[derive(Debug, Default)]
pub struct CLook {
    queue: VecDeque<IoRequest>,
}

impl CLook {
    /// Creates an empty C-LOOK queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeekPolicy for CLook {
    fn admit(&mut self, request: IoRequest) {
        self.queue.push_back(request);
    }

    fn fetch(&mut self, head: i64) -> Option<IoRequest> {
        if self.queue.is_empty() {
            return None;
        }
        // Wrap-around measures distance from track 0, which picks the
        // lowest pending track with the usual first-occurrence tie-break.
        let idx = nearest_matching(&self.queue, head, |r| r.track >= head)
            .or_else(|| nearest_matching(&self.queue, 0, |_| true))?;
        self.queue.remove(idx)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
