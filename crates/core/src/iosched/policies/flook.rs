//! F-LOOK (Frozen-queue LOOK) Policy.
//!
//! Two queues: the **active** queue being serviced and an **add** queue
//! collecting arrivals. A fetch from an empty active queue swaps the two.
//! Freezing the service set bounds starvation: a burst of new arrivals
//! cannot push back requests already being swept.

use std::collections::VecDeque;

use super::{Look, SeekPolicy};
use crate::iosched::request::IoRequest;

/// F-LOOK policy state. Direction starts upward and survives swaps.
#[derive(Debug)]
pub struct FLook {
    active: VecDeque<IoRequest>,
    add: VecDeque<IoRequest>,
    up: bool,
}

impl FLook {
    /// Creates empty active/add queues sweeping upward.
    pub fn new() -> Self {
        Self {
            active: VecDeque::new(),
            add: VecDeque::new(),
            up: true,
        }
    }
}

impl Default for FLook {
    fn default() -> Self {
        Self::new()
    }
}

impl SeekPolicy for FLook {
    fn admit(&mut self, request: IoRequest) {
        self.add.push_back(request);
    }

    fn fetch(&mut self, head: i64) -> Option<IoRequest> {
        if self.active.is_empty() {
            std::mem::swap(&mut self.active, &mut self.add);
        }
        let idx = Look::select(&self.active, &mut self.up, head)?;
        self.active.remove(idx)
    }

    fn pending(&self) -> usize {
        self.active.len() + self.add.len()
    }
}
