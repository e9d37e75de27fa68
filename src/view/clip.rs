//! Mapping absolute item positions onto a terminal viewport.
//!
//! Virtual items carry absolute offsets along their axis. Rendering one means
//! intersecting `[start, start + size)` with the viewport window
//! `[offset, offset + extent)` and translating the result to screen cells.

use unicode_width::UnicodeWidthStr;

/// Visible part of one item along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    /// Screen cell (relative to the viewport) where the visible part begins.
    pub screen: u16,
    /// Number of visible cells.
    pub len: u16,
    /// Cells of the item hidden before the viewport edge.
    pub skip: u16,
}

/// Intersect an item with the viewport window.
///
/// Returns `None` when the item is entirely outside it (overscanned items).
pub fn clip(start: u64, size: u64, offset: u64, extent: u64) -> Option<Clip> {
    let end = start.saturating_add(size);
    let window_end = offset.saturating_add(extent);
    let visible_start = start.max(offset);
    let visible_end = end.min(window_end);
    if visible_end <= visible_start {
        return None;
    }
    Some(Clip {
        screen: to_cells(visible_start - offset),
        len: to_cells(visible_end - visible_start),
        skip: to_cells(visible_start - start),
    })
}

fn to_cells(value: u64) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Center `label` in a field `width` cells wide.
///
/// Labels wider than the field are returned unchanged; the renderer clips them.
pub fn center(label: &str, width: u64) -> String {
    let label_width = label.width() as u64;
    let Some(spare) = width.checked_sub(label_width) else {
        return label.to_string();
    };
    let left = usize::try_from(spare / 2).unwrap_or(0);
    let right = usize::try_from(spare - spare / 2).unwrap_or(0);
    format!("{}{label}{}", " ".repeat(left), " ".repeat(right))
}
