//! Range calculation for fixed-size axes.
//!
//! Pure functions mapping `(count, item_size, offset, viewport_extent, overscan)`
//! to the inclusive index range that has to be materialized.
//!
//! # Algorithm
//!
//! With every item the same size, the item under any offset is found by
//! division instead of a search:
//!
//! - `raw_start = floor(offset / item_size)`
//! - `raw_end = ceil((offset + viewport_extent) / item_size) - 1`
//!
//! Overscan then widens the range symmetrically, clamped to `[0, count - 1]`.

use super::types::ItemSize;
use crate::model::VirtualizerError;
use std::ops::RangeInclusive;

/// Inclusive range of item indices.
///
/// An empty range is represented as `Option::<VisibleRange>::None` by every
/// function in this module, so a `VisibleRange` always holds at least one index.
///
/// # Invariants
/// - `start_index <= end_index`
/// - `end_index < count` of the axis it was computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    /// Index of the first item (inclusive).
    pub start_index: usize,
    /// Index of the last item (inclusive).
    pub end_index: usize,
}

impl VisibleRange {
    /// Create new range.
    ///
    /// # Panics
    /// In debug builds, panics if start_index > end_index.
    pub fn new(start_index: usize, end_index: usize) -> Self {
        debug_assert!(
            start_index <= end_index,
            "start_index {} > end_index {}",
            start_index,
            end_index
        );
        Self {
            start_index,
            end_index,
        }
    }

    /// Number of indices in the range (always >= 1).
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Always false: an empty range is represented as `None`, never as a
    /// `VisibleRange`. Present so `len` has its conventional companion.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the indices in ascending order.
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }

    /// Check if a specific index is inside the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }

    /// Widen by `overscan` on both sides, clamped to `[0, count - 1]`.
    pub fn with_overscan(&self, overscan: usize, count: usize) -> Self {
        let last = count.saturating_sub(1).max(self.end_index);
        Self::new(
            self.start_index.saturating_sub(overscan),
            self.end_index.saturating_add(overscan).min(last),
        )
    }
}

/// Compute the range of items intersecting the viewport, without overscan.
///
/// Returns `Ok(None)` when `count == 0`.
///
/// # Errors
/// `InvalidConfiguration` if `item_size == 0`.
///
/// # Examples
/// ```
/// # use virtscroll::virtualizer::{visible_range, VisibleRange};
/// let range = visible_range(10_000, 35, 0, 200).unwrap();
/// assert_eq!(range, Some(VisibleRange::new(0, 5)));
/// ```
pub fn visible_range(
    count: usize,
    item_size: u64,
    offset: u64,
    viewport_extent: u64,
) -> Result<Option<VisibleRange>, VirtualizerError> {
    let item_size = ItemSize::new(item_size)?;
    Ok(raw_range(count, item_size, offset, viewport_extent))
}

/// Compute the range of items to materialize, including overscan.
///
/// Covers every index whose extent intersects `[offset, offset + viewport_extent)`
/// plus up to `overscan` extra indices on each side. Never returns an index
/// outside `[0, count - 1]`.
///
/// # Errors
/// `InvalidConfiguration` if `item_size == 0`.
///
/// # Examples
/// ```
/// # use virtscroll::virtualizer::{compute_range, VisibleRange};
/// // Clamped at the lower bound: raw [0, 5] widened by 5.
/// let range = compute_range(10_000, 35, 0, 200, 5).unwrap();
/// assert_eq!(range, Some(VisibleRange::new(0, 10)));
///
/// assert_eq!(compute_range(0, 35, 0, 200, 5).unwrap(), None);
/// ```
pub fn compute_range(
    count: usize,
    item_size: u64,
    offset: u64,
    viewport_extent: u64,
    overscan: usize,
) -> Result<Option<VisibleRange>, VirtualizerError> {
    let item_size = ItemSize::new(item_size)?;
    Ok(overscanned_range(
        count,
        item_size,
        offset,
        viewport_extent,
        overscan,
    ))
}

/// Infallible core of [`visible_range`] for an already-validated size.
pub(crate) fn raw_range(
    count: usize,
    item_size: ItemSize,
    offset: u64,
    viewport_extent: u64,
) -> Option<VisibleRange> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let size = item_size.get();

    let start = to_index(offset / size).min(last);
    let end = to_index(offset.saturating_add(viewport_extent).div_ceil(size))
        .saturating_sub(1)
        .max(start)
        .min(last);

    Some(VisibleRange::new(start, end))
}

/// Infallible core of [`compute_range`] for an already-validated size.
pub(crate) fn overscanned_range(
    count: usize,
    item_size: ItemSize,
    offset: u64,
    viewport_extent: u64,
    overscan: usize,
) -> Option<VisibleRange> {
    raw_range(count, item_size, offset, viewport_extent)
        .map(|range| range.with_overscan(overscan, count))
}

/// Index of the item containing `offset`, or `None` past the end.
pub(crate) fn index_at_offset(count: usize, item_size: ItemSize, offset: u64) -> Option<usize> {
    let index = to_index(offset / item_size.get());
    (index < count).then_some(index)
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
