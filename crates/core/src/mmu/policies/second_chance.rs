//! Enhanced Second Chance (NRU) Replacement.
//!
//! Each tenant falls in class `2*REFERENCED + MODIFIED`. The victim is the
//! first frame of the lowest class encountered while sweeping from the
//! hand. Every `RESET_PERIOD` read/write instructions the sweep doubles as
//! a reset pass that clears all REFERENCED bits; the period is a global
//! clock driven only by actual resets, never by early-returning sweeps.
//! Outside a reset pass the sweep stops at the first class-0 frame, which
//! is sound because nothing has been mutated yet.

use super::{Pager, PagerCtx};

/// Instructions between REFERENCED reset passes.
const RESET_PERIOD: u64 = 50;

/// Enhanced-second-chance pager state.
#[derive(Debug, Default)]
pub struct SecondChancePager {
    hand: usize,
    last_reset: u64,
}

impl SecondChancePager {
    /// Creates the pager with the hand at frame 0.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pager for SecondChancePager {
    fn select_victim(&mut self, ctx: &mut PagerCtx<'_>) -> usize {
        let count = ctx.frames.len();
        // Commit the reset decision up front; an early return can only
        // happen on a non-reset pass, which must leave the clock alone.
        let reset = ctx.clock - self.last_reset >= RESET_PERIOD;
        if reset {
            self.last_reset = ctx.clock;
        }

        let mut first_of_class: [Option<usize>; 4] = [None; 4];
        let mut hand = self.hand;
        for _ in 0..count {
            let class = 2 * usize::from(ctx.referenced(hand)) + usize::from(ctx.modified(hand));
            if !reset && class == 0 {
                self.hand = (hand + 1) % count;
                return hand;
            }
            if first_of_class[class].is_none() {
                first_of_class[class] = Some(hand);
            }
            if reset {
                ctx.clear_referenced(hand);
            }
            hand = (hand + 1) % count;
        }

        let victim = first_of_class
            .iter()
            .flatten()
            .copied()
            .next()
            .unwrap_or(self.hand);
        self.hand = (victim + 1) % count;
        victim
    }
}
