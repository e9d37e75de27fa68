//! In-memory scroll container.
//!
//! `Viewport` plays the role a native scrollable element plays in a browser:
//! it owns both axes' scroll offsets, the visible extent and the content
//! extent, and clamps scrolling to the content. The terminal UI uses one
//! `Viewport` per pane; tests use it as a stand-in for real containers.

use super::scroll::ScrollElement;
use super::types::Orientation;
use std::cell::Cell;

#[derive(Debug, Default)]
struct AxisCells {
    offset: Cell<u64>,
    extent: Cell<u64>,
    /// `None` means the content size is unknown and scrolling is unbounded.
    content: Cell<Option<u64>>,
}

impl AxisCells {
    fn max_offset(&self) -> u64 {
        match self.content.get() {
            Some(content) => content.saturating_sub(self.extent.get()),
            None => u64::MAX,
        }
    }

    fn clamp(&self) {
        self.offset.set(self.offset.get().min(self.max_offset()));
    }
}

/// Scrollable container with a vertical and a horizontal axis.
#[derive(Debug, Default)]
pub struct Viewport {
    vertical: AxisCells,
    horizontal: AxisCells,
}

impl Viewport {
    /// Create a viewport with the given visible size and unknown content size.
    pub fn new(width: u64, height: u64) -> Self {
        let viewport = Self::default();
        viewport.horizontal.extent.set(width);
        viewport.vertical.extent.set(height);
        viewport
    }

    fn axis(&self, orientation: Orientation) -> &AxisCells {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }

    /// Resize the visible window along `orientation`, re-clamping the offset.
    pub fn set_extent(&self, orientation: Orientation, extent: u64) {
        let axis = self.axis(orientation);
        axis.extent.set(extent);
        axis.clamp();
    }

    /// Set the scrollable content length along `orientation`.
    ///
    /// Consumers size this from the virtualizer's total size, the same way a
    /// web page sizes the inner element of a scroll container.
    pub fn set_content_extent(&self, orientation: Orientation, content: u64) {
        let axis = self.axis(orientation);
        axis.content.set(Some(content));
        axis.clamp();
    }

    /// Content length along `orientation`, if known.
    pub fn content_extent(&self, orientation: Orientation) -> Option<u64> {
        self.axis(orientation).content.get()
    }

    /// Largest reachable offset along `orientation`.
    pub fn max_offset(&self, orientation: Orientation) -> u64 {
        self.axis(orientation).max_offset()
    }

    /// Scroll by a signed delta, clamped to `[0, max_offset]`.
    pub fn scroll_by(&self, orientation: Orientation, delta: i64) {
        let current = self.axis(orientation).offset.get();
        let target = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(orientation, target);
    }
}

impl ScrollElement for Viewport {
    fn scroll_offset(&self, orientation: Orientation) -> u64 {
        self.axis(orientation).offset.get()
    }

    fn viewport_extent(&self, orientation: Orientation) -> u64 {
        self.axis(orientation).extent.get()
    }

    fn scroll_to(&self, orientation: Orientation, offset: u64) {
        let axis = self.axis(orientation);
        axis.offset.set(offset.min(axis.max_offset()));
    }
}
