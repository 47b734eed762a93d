//! Aging Replacement.
//!
//! Every selection shifts each frame's 32-bit age register right and ORs
//! `0x8000_0000` into frames referenced since the previous selection
//! (clearing the bit). The victim is the smallest age, first occurrence in
//! the sweep from the hand. The register lives in the frame table but does
//! not survive re-use: the engine zeroes it at install time via the
//! `resets_age` hook.

use super::{Pager, PagerCtx};

/// Aging pager state.
#[derive(Debug, Default)]
pub struct AgingPager {
    hand: usize,
}

impl AgingPager {
    /// Creates the pager with the hand at frame 0.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pager for AgingPager {
    fn select_victim(&mut self, ctx: &mut PagerCtx<'_>) -> usize {
        let count = ctx.frames.len();
        let mut best: Option<(usize, u32)> = None;
        let mut hand = self.hand;
        for _ in 0..count {
            ctx.frames[hand].age >>= 1;
            if ctx.referenced(hand) {
                ctx.frames[hand].age |= 0x8000_0000;
                ctx.clear_referenced(hand);
            }
            let age = ctx.frames[hand].age;
            if best.is_none_or(|(_, lowest)| age < lowest) {
                best = Some((hand, age));
            }
            hand = (hand + 1) % count;
        }
        let victim = best.map_or(self.hand, |(idx, _)| idx);
        self.hand = (victim + 1) % count;
        victim
    }

    fn resets_age(&self) -> bool {
        true
    }
}
