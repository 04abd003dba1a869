//! Optimal (Belady) replacement policy.
//!
//! Needs the whole reference string, so it only exists in simulation.

use tracing::trace;

use super::{Replacer, VictimContext};
use crate::common::{FrameId, PageId};
use crate::sim::Policy;

/// Evicts the resident page whose next reference is farthest away.
///
/// A resident that is never referenced again is evicted outright; the first
/// such page in frame order wins. Otherwise the page with the largest next
/// reference index wins, ties going to the lowest frame.
#[derive(Debug, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Create a new Optimal replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for OptimalReplacer {
    fn policy(&self) -> Policy {
        Policy::Optimal
    }

    fn record_load(&mut self, _frame_id: FrameId, _page_id: PageId, _step: usize) {}

    fn record_hit(&mut self, _frame_id: FrameId, _page_id: PageId, _step: usize) {}

    fn select_victim(&mut self, ctx: &VictimContext<'_>) -> Option<FrameId> {
        let lookahead = ctx.cursor + 1;
        let mut farthest: Option<(FrameId, usize)> = None;

        for (frame_id, page_id) in ctx.frames.resident() {
            match ctx.references.next_occurrence(page_id, lookahead) {
                None => {
                    trace!(%frame_id, %page_id, "optimal: never referenced again");
                    return Some(frame_id);
                }
                Some(next) => {
                    if farthest.map_or(true, |(_, best)| next > best) {
                        farthest = Some((frame_id, next));
                    }
                }
            }
        }

        trace!(?farthest, "optimal: farthest next use");
        farthest.map(|(frame_id, _)| frame_id)
    }

    fn record_eviction(&mut self, _frame_id: FrameId, _page_id: PageId) {}

    // Stateless: everything comes from the context.
    fn size(&self) -> usize {
        0
    }
}
