//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use tracing::trace;

use super::{Replacer, VictimContext};
use crate::common::{FrameId, PageId};
use crate::sim::Policy;

/// Evicts the resident page whose last reference is oldest.
///
/// Keeps one recency entry per resident page: the step at which it was last
/// loaded or hit. Entries are dropped when their page is evicted.
#[derive(Debug, Default)]
pub struct LruReplacer {
    last_used: HashMap<PageId, usize>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a replacer sized for `frame_count` frames.
    pub fn with_capacity(frame_count: usize) -> Self {
        Self {
            last_used: HashMap::with_capacity(frame_count),
        }
    }

    /// Step at which `page_id` was last referenced, if resident.
    pub fn last_used(&self, page_id: PageId) -> Option<usize> {
        self.last_used.get(&page_id).copied()
    }
}

impl Replacer for LruReplacer {
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn record_load(&mut self, _frame_id: FrameId, page_id: PageId, step: usize) {
        self.last_used.insert(page_id, step);
    }

    fn record_hit(&mut self, _frame_id: FrameId, page_id: PageId, step: usize) {
        self.last_used.insert(page_id, step);
    }

    fn select_victim(&mut self, ctx: &VictimContext<'_>) -> Option<FrameId> {
        // Walk frames in order and keep the first strict minimum, so ties
        // go to the lowest frame.
        let mut victim: Option<(FrameId, usize)> = None;
        for (frame_id, page_id) in ctx.frames.resident() {
            let Some(&step) = self.last_used.get(&page_id) else {
                continue;
            };
            if victim.map_or(true, |(_, best)| step < best) {
                victim = Some((frame_id, step));
            }
        }

        trace!(?victim, "lru: least recent");
        victim.map(|(frame_id, _)| frame_id)
    }

    fn record_eviction(&mut self, _frame_id: FrameId, page_id: PageId) {
        self.last_used.remove(&page_id);
    }

    fn size(&self) -> usize {
        self.last_used.len()
    }
}
