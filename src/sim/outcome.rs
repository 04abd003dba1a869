//! Step outcomes - the immutable records the simulator hands to drivers.

use crate::common::{FrameId, PageId};

/// Result of one call to `step()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// One reference was consumed.
    Step(StepRecord),

    /// The reference string is exhausted. Nothing changed.
    EndOfSequence,
}

impl StepOutcome {
    /// The record, unless this is the terminal outcome.
    pub fn record(&self) -> Option<&StepRecord> {
        match self {
            StepOutcome::Step(record) => Some(record),
            StepOutcome::EndOfSequence => None,
        }
    }

    pub fn into_record(self) -> Option<StepRecord> {
        match self {
            StepOutcome::Step(record) => Some(record),
            StepOutcome::EndOfSequence => None,
        }
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, StepOutcome::EndOfSequence)
    }
}

/// What happened to a single reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Index of the consumed reference.
    pub step: usize,

    /// The referenced page.
    pub page: PageId,

    /// Whether the page was already resident.
    pub was_hit: bool,

    /// Frame holding `page` after the step.
    pub frame: FrameId,

    /// Page displaced to make room, if any.
    pub evicted: Option<PageId>,

    /// Frame contents after the step.
    pub frames: Vec<Option<PageId>>,

    /// Cursor after the step (`step + 1`).
    pub cursor_after: usize,
}

impl StepRecord {
    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.was_hit
    }
}
