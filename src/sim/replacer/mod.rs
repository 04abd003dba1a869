//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - First-In-First-Out
//! - [`LruReplacer`] - Least Recently Used
//! - [`OptimalReplacer`] - Belady's clairvoyant policy
//!
//! The simulator talks to a replacer only through the [`Replacer`] trait, so
//! policy-specific bookkeeping never leaks into the frame table owner.

use std::fmt;

use crate::common::{FrameId, PageId};
use crate::sim::{FrameTable, Policy, ReferenceString};

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// What a replacer may look at when choosing a victim.
#[derive(Debug, Clone, Copy)]
pub struct VictimContext<'a> {
    /// Current frame contents. Always full when a victim is requested.
    pub frames: &'a FrameTable,

    /// The whole reference string of the run.
    pub references: &'a ReferenceString,

    /// Index of the reference being serviced.
    pub cursor: usize,
}

/// A page-replacement policy.
///
/// The simulator drives a replacer with these events, in this order for a
/// single reference:
/// - hit: [`record_hit`](Replacer::record_hit)
/// - fault into an empty frame: [`record_load`](Replacer::record_load)
/// - fault with a full table: [`select_victim`](Replacer::select_victim),
///   [`record_eviction`](Replacer::record_eviction), then
///   [`record_load`](Replacer::record_load) for the same frame
pub trait Replacer: fmt::Debug + Send {
    /// Which policy this replacer implements.
    fn policy(&self) -> Policy;

    /// A page was loaded into `frame_id` at step `step`.
    fn record_load(&mut self, frame_id: FrameId, page_id: PageId, step: usize);

    /// A resident page was referenced again at step `step`.
    fn record_hit(&mut self, frame_id: FrameId, page_id: PageId, step: usize);

    /// Choose the frame to evict from a full table.
    ///
    /// Returns `None` only if the replacer's bookkeeping is out of sync with
    /// the frame table.
    fn select_victim(&mut self, ctx: &VictimContext<'_>) -> Option<FrameId>;

    /// The page in `frame_id` is being evicted.
    fn record_eviction(&mut self, frame_id: FrameId, page_id: PageId);

    /// Number of entries the replacer is tracking.
    fn size(&self) -> usize;
}
