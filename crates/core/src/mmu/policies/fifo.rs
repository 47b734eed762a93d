//! Circular-Hand FIFO Replacement.
//!
//! The hand walks the frame table one position per selection, evicting
//! whatever it lands on. No reference information is consulted.

use super::{Pager, PagerCtx};

/// FIFO pager state.
#[derive(Debug, Default)]
pub struct FifoPager {
    hand: usize,
}

impl FifoPager {
    /// Creates the pager with the hand at frame 0.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pager for FifoPager {
    fn select_victim(&mut self, ctx: &mut PagerCtx<'_>) -> usize {
        let victim = self.hand;
        self.hand = (self.hand + 1) % ctx.frames.len();
        victim
    }
}
