//! Single-axis virtualizer.
//!
//! Composes a [`ScrollObserver`] with range calculation and item
//! materialization into one engine per axis.
//!
//! # Recompute-and-publish
//!
//! Every event (a scroll/resize notification delivered through
//! [`Virtualizer::sync`], a configuration setter, or a programmatic scroll)
//! re-reads the container and publishes a fresh immutable [`Snapshot`].
//! Queries read only the latest snapshot, so two reads without an intervening
//! event always agree.
//!
//! # States
//!
//! - `Unbound`: no container. `virtual_items()` is empty, `total_size()` valid.
//! - `Bound`: container attached, snapshot present.
//!
//! Unbinding drops the scroll state but keeps the [`AxisConfig`], so a later
//! re-bind picks up the same count and sizes.

use super::item::{materialize, VirtualItem, VirtualItems};
use super::range::{index_at_offset, overscanned_range, raw_range, VisibleRange};
use super::scroll::{ObservedChange, ScrollElementProvider, ScrollObserver, ScrollState};
use super::types::{ItemSize, Orientation, ScrollAlign};
use crate::model::VirtualizerError;
use tracing::{debug, warn};

/// Construction options for a [`Virtualizer`].
///
/// # Examples
/// ```
/// # use std::rc::Rc;
/// # use virtscroll::virtualizer::{fixed_element, Viewport, Virtualizer, VirtualizerOptions};
/// let viewport = Rc::new(Viewport::new(400, 200));
/// let rows = Virtualizer::new(
///     VirtualizerOptions::new(10_000, 35)
///         .with_overscan(5)
///         .with_scroll_element(fixed_element(viewport)),
/// )
/// .unwrap();
/// assert_eq!(rows.total_size(), 350_000);
/// assert_eq!(rows.virtual_items().len(), 11);
/// ```
pub struct VirtualizerOptions {
    count: usize,
    item_size: u64,
    overscan: usize,
    orientation: Orientation,
    align: ScrollAlign,
    scroll_element: Option<ScrollElementProvider>,
}

impl VirtualizerOptions {
    /// Vertical axis of `count` items of `item_size`, no overscan, start alignment.
    pub fn new(count: usize, item_size: u64) -> Self {
        Self {
            count,
            item_size,
            overscan: 0,
            orientation: Orientation::Vertical,
            align: ScrollAlign::Start,
            scroll_element: None,
        }
    }

    /// Extra items rendered on each side of the visible range.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Set the scroll axis.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Shorthand for a horizontal axis.
    pub fn horizontal(self) -> Self {
        self.with_orientation(Orientation::Horizontal)
    }

    /// Default alignment for `scroll_to_index` calls without an explicit one.
    pub fn with_align(mut self, align: ScrollAlign) -> Self {
        self.align = align;
        self
    }

    /// Capability used to (re-)obtain the scroll container.
    pub fn with_scroll_element(mut self, provider: ScrollElementProvider) -> Self {
        self.scroll_element = Some(provider);
        self
    }
}

/// Validated configuration of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConfig {
    /// Total item count.
    pub count: usize,
    /// Fixed size shared by every item.
    pub item_size: ItemSize,
    /// Extra items on each side of the visible range.
    pub overscan: usize,
    /// Scroll axis.
    pub orientation: Orientation,
    /// Default `scroll_to_index` alignment.
    pub align: ScrollAlign,
}

impl AxisConfig {
    /// `count * item_size`, saturating.
    pub fn total_size(&self) -> u64 {
        self.item_size.extent_of(self.count)
    }
}

/// Result of the latest recomputation while bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Scroll state the ranges were computed from.
    pub scroll: ScrollState,
    /// Items intersecting the viewport.
    pub visible: Option<VisibleRange>,
    /// Items to materialize (visible plus overscan).
    pub range: Option<VisibleRange>,
}

/// Virtualization engine for one axis.
#[derive(Debug)]
pub struct Virtualizer {
    config: AxisConfig,
    observer: ScrollObserver,
    snapshot: Option<Snapshot>,
}

impl Virtualizer {
    /// Validate `options` and perform the first observation.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the item size is zero.
    pub fn new(options: VirtualizerOptions) -> Result<Self, VirtualizerError> {
        let item_size = ItemSize::new(options.item_size)?;
        let config = AxisConfig {
            count: options.count,
            item_size,
            overscan: options.overscan,
            orientation: options.orientation,
            align: options.align,
        };
        let mut virtualizer = Self {
            config,
            observer: ScrollObserver::new(options.orientation, options.scroll_element),
            snapshot: None,
        };
        virtualizer.sync();
        Ok(virtualizer)
    }

    /// Current configuration.
    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// Total item count.
    pub fn count(&self) -> usize {
        self.config.count
    }

    /// Scroll axis.
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Total scrollable extent: `count * item_size`. Valid in every state.
    pub fn total_size(&self) -> u64 {
        self.config.total_size()
    }

    /// Items to render, index-ascending and non-overlapping.
    ///
    /// Empty while unbound.
    pub fn virtual_items(&self) -> VirtualItems {
        materialize(self.range(), self.config.item_size)
    }

    /// Overscanned range of the latest snapshot.
    pub fn range(&self) -> Option<VisibleRange> {
        self.snapshot.and_then(|snapshot| snapshot.range)
    }

    /// Range strictly intersecting the viewport in the latest snapshot.
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.snapshot.and_then(|snapshot| snapshot.visible)
    }

    /// Latest observed scroll state; `None` while unbound.
    pub fn scroll_state(&self) -> Option<ScrollState> {
        self.snapshot.map(|snapshot| snapshot.scroll)
    }

    /// Latest snapshot; `None` while unbound.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.snapshot
    }

    /// Whether a container was attached at the last observation.
    pub fn is_bound(&self) -> bool {
        self.observer.is_bound()
    }

    /// Handle a scroll or resize notification from the container.
    ///
    /// Re-obtains the container through the provider, re-reads offset and
    /// extent, and recomputes before returning.
    pub fn sync(&mut self) -> ObservedChange {
        let change = self.observer.observe(self.total_size());
        self.recompute();
        change
    }

    /// Replace the scroll element provider and observe immediately.
    pub fn set_scroll_element(&mut self, provider: Option<ScrollElementProvider>) -> ObservedChange {
        self.observer.set_provider(provider);
        self.sync()
    }

    /// Change the item count.
    pub fn set_count(&mut self, count: usize) {
        if self.config.count != count {
            debug!(orientation = ?self.config.orientation, count, "Item count changed");
        }
        self.config.count = count;
        self.sync();
    }

    /// Change the fixed item size.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `item_size == 0`; the previous size is kept.
    pub fn set_item_size(&mut self, item_size: u64) -> Result<(), VirtualizerError> {
        let item_size = ItemSize::new(item_size).inspect_err(|err| {
            warn!(orientation = ?self.config.orientation, %err, "Rejected item size");
        })?;
        self.config.item_size = item_size;
        self.sync();
        Ok(())
    }

    /// Change the overscan margin.
    pub fn set_overscan(&mut self, overscan: usize) {
        self.config.overscan = overscan;
        self.sync();
    }

    /// Change the default `scroll_to_index` alignment.
    pub fn set_align(&mut self, align: ScrollAlign) {
        self.config.align = align;
    }

    /// Offset that `scroll_to_index(index, align)` would scroll to.
    ///
    /// Returns `Ok(None)` while unbound.
    ///
    /// # Errors
    /// `OutOfRange` if `index >= count`.
    pub fn offset_for_index(
        &self,
        index: usize,
        align: Option<ScrollAlign>,
    ) -> Result<Option<u64>, VirtualizerError> {
        self.check_index(index)?;
        let Some(scroll) = self.scroll_state() else {
            return Ok(None);
        };

        let item = VirtualItem::at(index, self.config.item_size);
        let extent = scroll.viewport_extent;
        let target = match align.unwrap_or(self.config.align) {
            ScrollAlign::Start => item.start,
            ScrollAlign::End => item.end().saturating_sub(extent),
            ScrollAlign::Center => item
                .start
                .saturating_add(item.size / 2)
                .saturating_sub(extent / 2),
            ScrollAlign::Auto => {
                if item.start >= scroll.offset && item.end() <= scroll.end() {
                    scroll.offset
                } else if item.size >= extent || item.start < scroll.offset {
                    item.start
                } else {
                    item.end().saturating_sub(extent)
                }
            }
        };

        Ok(Some(target.min(scroll.max_offset(self.total_size()))))
    }

    /// Scroll the container so item `index` is shown per `align`.
    ///
    /// `None` uses the configured default alignment. Recomputes before
    /// returning, so the next `virtual_items()` includes `index`. While
    /// unbound this is a no-op.
    ///
    /// # Errors
    /// `OutOfRange` if `index >= count`; nothing is scrolled.
    pub fn scroll_to_index(
        &mut self,
        index: usize,
        align: Option<ScrollAlign>,
    ) -> Result<(), VirtualizerError> {
        // Re-read first: the user may have scrolled since the last event.
        self.sync();
        let target = self.offset_for_index(index, align).inspect_err(|err| {
            warn!(orientation = ?self.config.orientation, %err, "Rejected scroll_to_index");
        })?;
        if let Some(offset) = target {
            debug!(orientation = ?self.config.orientation, index, offset, "Scrolling to index");
            self.scroll_to_offset(offset);
        }
        Ok(())
    }

    /// Scroll the container to `offset`, clamped to the content.
    pub fn scroll_to_offset(&mut self, offset: u64) {
        let total = self.total_size();
        let clamped = self
            .scroll_state()
            .map_or(offset, |scroll| offset.min(scroll.max_offset(total)));
        self.observer.scroll_to(clamped, total);
        self.recompute();
    }

    /// Index of the item under absolute axis `offset`, if any.
    pub fn item_at_offset(&self, offset: u64) -> Option<usize> {
        index_at_offset(self.config.count, self.config.item_size, offset)
    }

    fn check_index(&self, index: usize) -> Result<(), VirtualizerError> {
        if index >= self.config.count {
            return Err(VirtualizerError::OutOfRange {
                index,
                count: self.config.count,
            });
        }
        Ok(())
    }

    fn recompute(&mut self) {
        let config = self.config;
        self.snapshot = self.observer.state().map(|scroll| Snapshot {
            scroll,
            visible: raw_range(
                config.count,
                config.item_size,
                scroll.offset,
                scroll.viewport_extent,
            ),
            range: overscanned_range(
                config.count,
                config.item_size,
                scroll.offset,
                scroll.viewport_extent,
                config.overscan,
            ),
        });
    }
}
