//! Random Replacement.
//!
//! Draws the victim index from the shared deterministic random stream,
//! the same cursor that serves the CPU simulator's bursts, so draw order
//! is part of the observable behaviour.

use super::{Pager, PagerCtx};

/// Random pager state (the stream lives in the context).
#[derive(Debug, Default)]
pub struct RandomPager;

impl RandomPager {
    /// Creates the pager.
    pub fn new() -> Self {
        Self
    }
}

impl Pager for RandomPager {
    fn select_victim(&mut self, ctx: &mut PagerCtx<'_>) -> usize {
        ctx.rng.index(ctx.frames.len())
    }
}
