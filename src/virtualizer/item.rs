//! Virtual item descriptors and their lazy materialization.

use super::range::VisibleRange;
use super::types::ItemSize;
use std::iter::FusedIterator;

/// Position and size of one item along an axis.
///
/// Independent of whether the consumer actually renders it. For a fixed-size
/// axis `start == index * size` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualItem {
    /// 0-based index of the item in the collection.
    pub index: usize,
    /// Distance from the axis origin to the item's leading edge.
    pub start: u64,
    /// Length of the item along the axis.
    pub size: u64,
}

impl VirtualItem {
    /// Descriptor for the item at `index` on an axis of `item_size`.
    pub fn at(index: usize, item_size: ItemSize) -> Self {
        Self {
            index,
            start: item_size.offset_of(index),
            size: item_size.get(),
        }
    }

    /// Trailing edge (exclusive), saturating.
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size)
    }
}

/// Lazy, ordered sequence of [`VirtualItem`]s for one range.
///
/// Restartable: cloning yields an independent iterator over the same items.
#[derive(Debug, Clone)]
pub struct VirtualItems {
    next: usize,
    end: usize,
    item_size: ItemSize,
}

impl VirtualItems {
    /// An iterator that yields nothing.
    pub fn empty(item_size: ItemSize) -> Self {
        Self {
            next: 0,
            end: 0,
            item_size,
        }
    }
}

/// Materialize one [`VirtualItem`] per index of `range`, in ascending order.
///
/// `None` (the empty range) produces an empty sequence.
///
/// # Examples
/// ```
/// # use virtscroll::virtualizer::{materialize, ItemSize, VisibleRange};
/// let size = ItemSize::new(35).unwrap();
/// let starts: Vec<u64> = materialize(Some(VisibleRange::new(2, 4)), size)
///     .map(|item| item.start)
///     .collect();
/// assert_eq!(starts, vec![70, 105, 140]);
/// ```
pub fn materialize(range: Option<VisibleRange>, item_size: ItemSize) -> VirtualItems {
    match range {
        Some(range) => VirtualItems {
            next: range.start_index,
            end: range.end_index.saturating_add(1),
            item_size,
        },
        None => VirtualItems::empty(item_size),
    }
}

impl Iterator for VirtualItems {
    type Item = VirtualItem;

    fn next(&mut self) -> Option<VirtualItem> {
        if self.next >= self.end {
            return None;
        }
        let item = VirtualItem::at(self.next, self.item_size);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<VirtualItem> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for VirtualItems {
    fn next_back(&mut self) -> Option<VirtualItem> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(VirtualItem::at(self.end, self.item_size))
    }
}

impl ExactSizeIterator for VirtualItems {}

impl FusedIterator for VirtualItems {}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u64) -> ItemSize {
        ItemSize::new(n).unwrap()
    }

    #[test]
    fn item_at_derives_start_from_index() {
        let item = VirtualItem::at(100, size(35));
        assert_eq!(
            item,
            VirtualItem {
                index: 100,
                start: 3500,
                size: 35
            }
        );
        assert_eq!(item.end(), 3535);
    }

    #[test]
    fn materialize_none_is_empty() {
        let mut items = materialize(None, size(10));
        assert_eq!(items.len(), 0);
        assert_eq!(items.next(), None);
    }

    #[test]
    fn materialize_yields_one_item_per_index() {
        let items: Vec<_> = materialize(Some(VisibleRange::new(3, 6)), size(10)).collect();
        let indices: Vec<_> = items.iter().map(|item| item.index).collect();
        assert_eq!(indices, vec![3, 4, 5, 6]);
        assert!(items.iter().all(|item| item.size == 10));
        assert!(items.iter().all(|item| item.start == item.index as u64 * 10));
    }

    #[test]
    fn items_are_contiguous_and_non_overlapping() {
        let items: Vec<_> = materialize(Some(VisibleRange::new(0, 20)), size(7)).collect();
        for pair in items.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
        }
    }

    #[test]
    fn exact_size_matches_range_len() {
        let range = VisibleRange::new(10, 29);
        let items = materialize(Some(range), size(3));
        assert_eq!(items.len(), range.len());
    }

    #[test]
    fn clone_restarts_independently() {
        let mut items = materialize(Some(VisibleRange::new(0, 2)), size(1));
        let restart = items.clone();
        items.next();
        assert_eq!(items.count(), 2);
        assert_eq!(restart.count(), 3);
    }

    #[test]
    fn next_back_walks_from_the_end() {
        let mut items = materialize(Some(VisibleRange::new(4, 6)), size(2));
        assert_eq!(items.next_back().map(|item| item.index), Some(6));
        assert_eq!(items.next().map(|item| item.index), Some(4));
        assert_eq!(items.next_back().map(|item| item.index), Some(5));
        assert_eq!(items.next(), None);
        assert_eq!(items.next_back(), None);
    }

    #[test]
    fn nth_skips_without_overrunning() {
        let mut items = materialize(Some(VisibleRange::new(0, 4)), size(1));
        assert_eq!(items.nth(2).map(|item| item.index), Some(2));
        assert_eq!(items.nth(10), None);
        assert_eq!(items.next(), None);
    }
}
