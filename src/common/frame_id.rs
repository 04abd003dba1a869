//! Frame slot index.

use std::fmt;

/// Position of a slot in the [`FrameTable`](crate::FrameTable).
///
/// Slots are numbered from 0 in table order. That order is also the
/// tie-break order for victim selection, so `FrameId` is `Ord`.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// assert!(FrameId::new(0) < FrameId::new(2));
/// assert_eq!(FrameId::new(2).to_string(), "slot 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    #[inline]
    pub fn new(slot: usize) -> Self {
        FrameId(slot)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}
