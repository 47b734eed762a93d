//! Working-Set Replacement.
//!
//! Approximates each frame's membership in its process's working set with
//! a fixed window. Sweeping from the hand: a referenced frame is restamped
//! with the current clock and its bit cleared; an unreferenced frame older
//! than the window is evicted on sight; otherwise the oldest stamp wins,
//! first occurrence on ties.

use super::{Pager, PagerCtx};

/// Window (τ) in read/write instructions.
const WINDOW: u64 = 50;

/// Working-set pager state.
#[derive(Debug, Default)]
pub struct WorkingSetPager {
    hand: usize,
}

impl WorkingSetPager {
    /// Creates the pager with the hand at frame 0.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pager for WorkingSetPager {
    fn select_victim(&mut self, ctx: &mut PagerCtx<'_>) -> usize {
        let count = ctx.frames.len();
        // The starting position seeds the victim: if every frame is
        // referenced this round, the sweep origin is evicted.
        let mut victim = self.hand;
        let mut oldest: Option<u64> = None;
        let mut hand = self.hand;
        for _ in 0..count {
            if ctx.referenced(hand) {
                ctx.frames[hand].last_used = ctx.clock;
                ctx.clear_referenced(hand);
            } else {
                let last_used = ctx.frames[hand].last_used;
                if ctx.clock - last_used >= WINDOW {
                    self.hand = (hand + 1) % count;
                    return hand;
                }
                if oldest.is_none_or(|o| last_used < o) {
                    oldest = Some(last_used);
                    victim = hand;
                }
            }
            hand = (hand + 1) % count;
        }
        self.hand = (victim + 1) % count;
        victim
    }
}
