//! Frame table - the fixed set of physical frames.
//!
//! A [`FrameTable`] holds one slot per frame. Each slot is either empty or
//! holds the id of the resident page.

use crate::common::{FrameId, PageId};

/// The physical frames of a run.
///
/// The number of slots is fixed at construction. Slot order matters to FIFO,
/// which uses slot indices as its queue entries; LRU and Optimal treat it as
/// plain storage but break ties by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<Option<PageId>>,
}

impl FrameTable {
    /// Create a table of `frame_count` empty frames.
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    /// Number of frames (occupied or not).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied frames.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether every frame holds a page.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The page in `frame_id`, if any.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).copied().flatten()
    }

    /// The frame holding `page_id`, if it is resident.
    pub fn find(&self, page_id: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|&slot| slot == Some(page_id))
            .map(FrameId::new)
    }

    /// Lowest-index empty frame.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Put `page_id` into `frame_id`, returning the page it displaced.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    pub fn place(&mut self, frame_id: FrameId, page_id: PageId) -> Option<PageId> {
        self.slots[frame_id.0].replace(page_id)
    }

    /// Resident pages in frame order, with their frame ids.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|page_id| (FrameId::new(i), page_id)))
    }

    /// All slots in frame order.
    #[inline]
    pub fn as_slice(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Owned copy of the slots for outcome records.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let table = FrameTable::new(3);
        assert_eq!(table.capacity(), 3);
        assert_eq!(table.occupied(), 0);
        assert!(!table.is_full());
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
    }

    #[test]
    fn test_place_fills_lowest_first() {
        let mut table = FrameTable::new(2);

        let slot = table.first_empty().unwrap();
        assert_eq!(table.place(slot, PageId::new(7)), None);
        assert_eq!(table.first_empty(), Some(FrameId::new(1)));

        let slot = table.first_empty().unwrap();
        table.place(slot, PageId::new(3));
        assert!(table.is_full());
        assert_eq!(table.first_empty(), None);
    }

    #[test]
    fn test_place_returns_displaced_page() {
        let mut table = FrameTable::new(1);
        table.place(FrameId::new(0), PageId::new(1));

        let old = table.place(FrameId::new(0), PageId::new(2));
        assert_eq!(old, Some(PageId::new(1)));
        assert_eq!(table.get(FrameId::new(0)), Some(PageId::new(2)));
    }

    #[test]
    fn test_find_and_resident() {
        let mut table = FrameTable::new(3);
        table.place(FrameId::new(0), PageId::new(4));
        table.place(FrameId::new(2), PageId::new(9));

        assert_eq!(table.find(PageId::new(9)), Some(FrameId::new(2)));
        assert_eq!(table.find(PageId::new(5)), None);

        let resident: Vec<_> = table.resident().collect();
        assert_eq!(
            resident,
            vec![
                (FrameId::new(0), PageId::new(4)),
                (FrameId::new(2), PageId::new(9)),
            ]
        );
        assert_eq!(table.snapshot(), vec![Some(PageId::new(4)), None, Some(PageId::new(9))]);
    }
}
