//! Scrolling keyboard action handler.
//!
//! Transforms AppState in response to scroll and jump actions. Line and page
//! scrolling move the active pane's viewport like a user would; jumps go
//! through the engine's `scroll_to_index`.

use crate::model::KeyAction;
use crate::state::{AppState, Pane};
use crate::virtualizer::Orientation;
use tracing::warn;

/// Handle a scroll keyboard action on the active pane.
///
/// Non-scroll actions leave the state unchanged.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) {
    let primary = state.primary_axis().orientation();
    match action {
        KeyAction::ScrollUp => step(state, Orientation::Vertical, -1),
        KeyAction::ScrollDown => step(state, Orientation::Vertical, 1),
        KeyAction::ScrollLeft => step(state, Orientation::Horizontal, -1),
        KeyAction::ScrollRight => step(state, Orientation::Horizontal, 1),
        KeyAction::PageUp => page(state, primary, -1),
        KeyAction::PageDown => page(state, primary, 1),
        KeyAction::ScrollToTop => {
            state.primary_axis_mut().scroll_to_offset(0);
        }
        KeyAction::ScrollToBottom => {
            state.primary_axis_mut().scroll_to_offset(u64::MAX);
        }
        KeyAction::ScrollToHalfway => {
            let halfway = state.primary_axis().count() / 2;
            jump(state, halfway);
        }
        KeyAction::ScrollToLast => match state.primary_axis().count().checked_sub(1) {
            Some(last) => jump(state, last),
            None => state.status = Some("Nothing to scroll to".to_string()),
        },
        _ => {}
    }
}

/// Scroll by `items` item sizes along `orientation`.
fn step(state: &mut AppState, orientation: Orientation, items: i64) {
    let Some(size) = item_size(state, orientation) else {
        return;
    };
    state.scroll_active_by(orientation, items.saturating_mul(size));
}

/// Scroll by `pages` viewport extents along `orientation`.
fn page(state: &mut AppState, orientation: Orientation, pages: i64) {
    let extent = state
        .primary_axis()
        .scroll_state()
        .map_or(0, |scroll| scroll.viewport_extent);
    let extent = i64::try_from(extent).unwrap_or(i64::MAX);
    state.scroll_active_by(orientation, pages.saturating_mul(extent));
}

/// Jump to `index`; `scroll_to_index` re-syncs first, so `is_bound` is current afterwards.
fn jump(state: &mut AppState, index: usize) {
    match state.primary_axis_mut().scroll_to_index(index, None) {
        Ok(()) if !state.primary_axis().is_bound() => {
            state.status = Some(format!("{} hidden, nothing to scroll", state.active().title()));
        }
        Ok(()) => state.status = Some(format!("Scrolled to index {index}")),
        Err(err) => {
            warn!(%err, "Jump rejected");
            state.status = Some(err.to_string());
        }
    }
}

/// Item size of the active pane along `orientation`, if it scrolls that way.
fn item_size(state: &AppState, orientation: Orientation) -> Option<i64> {
    let virtualizer = match (state.active(), orientation) {
        (Pane::Rows, Orientation::Vertical) => state.rows().virtualizer(),
        (Pane::Columns, Orientation::Horizontal) => state.columns().virtualizer(),
        (Pane::Grid, Orientation::Vertical) => state.grid().grid().rows(),
        (Pane::Grid, Orientation::Horizontal) => state.grid().grid().columns(),
        _ => return None,
    };
    Some(i64::try_from(virtualizer.config().item_size.get()).unwrap_or(i64::MAX))
}
