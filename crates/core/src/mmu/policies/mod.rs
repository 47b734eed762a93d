//! Frame Replacement Policies.
//!
//! Implements the victim-selection algorithms for the paging engine.
//!
//! # Policies
//!
//! - `FifoPager`: circular hand over the frame table.
//! - `RandomPager`: frame drawn from the shared random stream.
//! - `ClockPager`: second chance via REFERENCED bits.
//! - `SecondChancePager`: enhanced second chance (NRU classes) with a
//!   periodic REFERENCED reset.
//! - `AgingPager`: 32-bit per-frame age registers.
//! - `WorkingSetPager`: fixed-window working set.
//!
//! Selection runs only when the free list is empty, so every frame has a
//! tenant on entry; the free-frame fallbacks in the scanning policies are
//! defensive only in the sense that a tenantless frame is trivially the
//! best victim.

/// Aging policy.
pub mod aging;

/// Clock (second chance) policy.
pub mod clock;

/// Circular-hand FIFO policy.
pub mod fifo;

/// Random-selection policy.
pub mod random;

/// Enhanced second chance (NRU) policy.
pub mod second_chance;

/// Working-set policy.
pub mod working_set;

pub use aging::AgingPager;
pub use clock::ClockPager;
pub use fifo::FifoPager;
pub use random::RandomPager;
pub use second_chance::SecondChancePager;
pub use working_set::WorkingSetPager;

use crate::common::rng::RandomSource;
use crate::config::PagerKind;
use crate::mmu::frame::Frame;
use crate::mmu::process::MmuProcess;

/// Everything a pager may inspect or mutate while choosing a victim.
///
/// The scanning policies read and clear REFERENCED/MODIFIED bits through
/// each frame's tenant, so they receive the process arena alongside the
/// frame arena. `clock` is the read/write instruction counter.
pub struct PagerCtx<'a> {
    /// The frame arena.
    pub frames: &'a mut [Frame],
    /// The process arena (for tenant PTE access).
    pub processes: &'a mut [MmuProcess],
    /// The shared random stream (Random pager only).
    pub rng: &'a mut RandomSource,
    /// Read/write instruction clock.
    pub clock: u64,
}

impl PagerCtx<'_> {
    /// REFERENCED bit of the frame's tenant PTE; free frames read false.
    pub fn referenced(&self, frame: usize) -> bool {
        self.frames[frame].tenant.is_some_and(|t| {
            self.processes[t.pid].page_table[t.vpage].referenced()
        })
    }

    /// MODIFIED bit of the frame's tenant PTE; free frames read false.
    pub fn modified(&self, frame: usize) -> bool {
        self.frames[frame].tenant.is_some_and(|t| {
            self.processes[t.pid].page_table[t.vpage].modified()
        })
    }

    /// Clears the tenant PTE's REFERENCED bit.
    pub fn clear_referenced(&mut self, frame: usize) {
        if let Some(t) = self.frames[frame].tenant {
            self.processes[t.pid].page_table[t.vpage].set_referenced(false);
        }
    }
}

/// Capability set of a frame-replacement policy.
pub trait Pager {
    /// Chooses the victim frame. Called only when the free list is empty.
    fn select_victim(&mut self, ctx: &mut PagerCtx<'_>) -> usize;

    /// Whether the engine zeroes the frame's age register at install time.
    /// Only the Aging pager answers true.
    fn resets_age(&self) -> bool {
        false
    }
}

/// Statically dispatched pager selection.
#[derive(Debug)]
pub enum PagerPolicy {
    /// Circular hand.
    Fifo(FifoPager),
    /// Random stream.
    Random(RandomPager),
    /// Second chance.
    Clock(ClockPager),
    /// NRU classes.
    SecondChance(SecondChancePager),
    /// Age registers.
    Aging(AgingPager),
    /// Working set.
    WorkingSet(WorkingSetPager),
}

impl PagerPolicy {
    /// Builds the configured pager.
    pub fn from_kind(kind: PagerKind) -> Self {
        match kind {
            PagerKind::Fifo => Self::Fifo(FifoPager::new()),
            PagerKind::Random => Self::Random(RandomPager::new()),
            PagerKind::Clock => Self::Clock(ClockPager::new()),
            PagerKind::SecondChance => Self::SecondChance(SecondChancePager::new()),
            PagerKind::Aging => Self::Aging(AgingPager::new()),
            PagerKind::WorkingSet => Self::WorkingSet(WorkingSetPager::new()),
        }
    }
}

impl Pager for PagerPolicy {
    fn select_victim(&mut self, ctx: &mut PagerCtx<'_>) -> usize {
        match self {
            Self::Fifo(p) => p.select_victim(ctx),
            Self::Random(p) => p.select_victim(ctx),
            Self::Clock(p) => p.select_victim(ctx),
            Self::SecondChance(p) => p.select_victim(ctx),
            Self::Aging(p) => p.select_victim(ctx),
            Self::WorkingSet(p) => p.select_victim(ctx),
        }
    }

    fn resets_age(&self) -> bool {
        matches!(self, Self::Aging(_))
    }
}
