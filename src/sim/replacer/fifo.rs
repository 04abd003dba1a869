//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use tracing::trace;

use super::{Replacer, VictimContext};
use crate::common::{FrameId, PageId};
use crate::sim::Policy;

/// Evicts pages in the order they were loaded.
///
/// Hits do not reorder the queue.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Frame IDs in load order (front = oldest).
    queue: VecDeque<FrameId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a replacer sized for `frame_count` frames.
    pub fn with_capacity(frame_count: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(frame_count),
        }
    }

    /// Frames in eviction order.
    pub fn queue(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.queue.iter().copied()
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn record_load(&mut self, frame_id: FrameId, _page_id: PageId, _step: usize) {
        self.queue.push_back(frame_id);
    }

    fn record_hit(&mut self, _frame_id: FrameId, _page_id: PageId, _step: usize) {}

    fn select_victim(&mut self, _ctx: &VictimContext<'_>) -> Option<FrameId> {
        let victim = self.queue.pop_front();
        trace!(?victim, "fifo: oldest load");
        victim
    }

    // The head was already popped by select_victim.
    fn record_eviction(&mut self, _frame_id: FrameId, _page_id: PageId) {}

    fn size(&self) -> usize {
        self.queue.len()
    }
}
