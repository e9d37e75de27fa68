//! Demo panes: a virtualizer paired with the viewport it observes.
//!
//! The host (the terminal shell) owns each [`Viewport`] and is responsible
//! for delivering scroll and resize notifications, which here means calling
//! `sync` on the virtualizers after every mutation of the viewport.

use crate::config::{AxisSettings, GridSettings};
use crate::model::VirtualizerError;
use crate::virtualizer::{
    fixed_element, GridVirtualizer, ObservedChange, Orientation, ScrollElement,
    ScrollElementProvider, Viewport, Virtualizer, VirtualizerOptions,
};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::info;

/// The three demo panes, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pane {
    /// Vertical list.
    #[default]
    Rows,
    /// Horizontal list.
    Columns,
    /// Two-axis grid.
    Grid,
}

impl Pane {
    /// All panes in tab order.
    pub const ALL: [Pane; 3] = [Pane::Rows, Pane::Columns, Pane::Grid];

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Pane::Rows => "Rows",
            Pane::Columns => "Columns",
            Pane::Grid => "Grid",
        }
    }

    /// Position in [`Pane::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Pane::Rows => 0,
            Pane::Columns => 1,
            Pane::Grid => 2,
        }
    }

    /// Pane at `index` in tab order.
    pub fn from_index(index: usize) -> Option<Pane> {
        Self::ALL.get(index).copied()
    }

    /// Next pane, wrapping.
    pub fn next(&self) -> Pane {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous pane, wrapping.
    pub fn prev(&self) -> Pane {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error returned when parsing an unknown pane name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pane {0:?} (expected rows, columns or grid)")]
pub struct UnknownPane(pub String);

impl std::str::FromStr for Pane {
    type Err = UnknownPane;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rows" => Ok(Pane::Rows),
            "columns" => Ok(Pane::Columns),
            "grid" => Ok(Pane::Grid),
            _ => Err(UnknownPane(s.to_string())),
        }
    }
}

/// Size the viewport's content along the virtualized axis and pin the
/// other axis to the visible window.
fn fit_content(viewport: &Viewport, orientation: Orientation, total: u64) {
    let cross = match orientation {
        Orientation::Vertical => Orientation::Horizontal,
        Orientation::Horizontal => Orientation::Vertical,
    };
    viewport.set_content_extent(orientation, total);
    viewport.set_content_extent(cross, viewport.viewport_extent(cross));
}

/// A single-axis list bound to a viewport that is always mounted.
#[derive(Debug)]
pub struct ListPane {
    viewport: Rc<Viewport>,
    virtualizer: Virtualizer,
}

impl ListPane {
    /// Build a list pane along `orientation`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `settings.item_size` is zero.
    pub fn new(settings: AxisSettings, orientation: Orientation) -> Result<Self, VirtualizerError> {
        let viewport = Rc::new(Viewport::default());
        let virtualizer = Virtualizer::new(
            VirtualizerOptions::new(settings.count, settings.item_size)
                .with_orientation(orientation)
                .with_overscan(settings.overscan)
                .with_align(settings.align)
                .with_scroll_element(fixed_element(viewport.clone())),
        )?;
        fit_content(&viewport, orientation, virtualizer.total_size());
        Ok(Self {
            viewport,
            virtualizer,
        })
    }

    /// The scroll container.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The engine.
    pub fn virtualizer(&self) -> &Virtualizer {
        &self.virtualizer
    }

    /// The engine, for programmatic scrolling and reconfiguration.
    pub fn virtualizer_mut(&mut self) -> &mut Virtualizer {
        &mut self.virtualizer
    }

    /// Resize the viewport and notify the engine.
    pub fn resize(&mut self, width: u64, height: u64) -> ObservedChange {
        self.viewport.set_extent(Orientation::Horizontal, width);
        self.viewport.set_extent(Orientation::Vertical, height);
        self.sync()
    }

    /// Scroll the viewport by `delta` cells along `orientation` and notify the engine.
    pub fn scroll_by(&mut self, orientation: Orientation, delta: i64) -> ObservedChange {
        self.viewport.scroll_by(orientation, delta);
        self.sync()
    }

    /// Re-fit the content to the engine's total size and re-observe.
    pub fn sync(&mut self) -> ObservedChange {
        fit_content(
            &self.viewport,
            self.virtualizer.orientation(),
            self.virtualizer.total_size(),
        );
        self.virtualizer.sync()
    }
}

type ViewportSlot = Rc<RefCell<Option<Rc<Viewport>>>>;

fn slot_provider(slot: &ViewportSlot) -> ScrollElementProvider {
    let slot = slot.clone();
    Box::new(move || {
        slot.borrow()
            .clone()
            .map(|viewport| viewport as Rc<dyn ScrollElement>)
    })
}

/// A grid whose viewport can be mounted and unmounted at runtime.
///
/// Both axes share one provider that reads the mount slot, so unmounting
/// drops both axes to `Unbound` on their next sync and remounting binds them
/// to a fresh viewport scrolled to the origin.
#[derive(Debug)]
pub struct GridPane {
    slot: ViewportSlot,
    size: (u64, u64),
    grid: GridVirtualizer,
}

impl GridPane {
    /// Build a grid pane with its viewport mounted.
    ///
    /// # Errors
    /// `InvalidConfiguration` if a row or column size is zero.
    pub fn new(settings: GridSettings) -> Result<Self, VirtualizerError> {
        let slot: ViewportSlot = Rc::new(RefCell::new(Some(Rc::new(Viewport::default()))));
        let rows = Virtualizer::new(
            VirtualizerOptions::new(settings.rows, settings.row_size)
                .with_overscan(settings.overscan)
                .with_align(settings.align)
                .with_scroll_element(slot_provider(&slot)),
        )?;
        let columns = Virtualizer::new(
            VirtualizerOptions::new(settings.columns, settings.column_size)
                .horizontal()
                .with_overscan(settings.overscan)
                .with_align(settings.align)
                .with_scroll_element(slot_provider(&slot)),
        )?;
        let mut pane = Self {
            slot,
            size: (0, 0),
            grid: GridVirtualizer::new(rows, columns)?,
        };
        pane.sync();
        Ok(pane)
    }

    /// The mounted viewport, if shown.
    pub fn viewport(&self) -> Option<Rc<Viewport>> {
        self.slot.borrow().clone()
    }

    /// Whether the viewport is mounted.
    pub fn is_shown(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// The engine.
    pub fn grid(&self) -> &GridVirtualizer {
        &self.grid
    }

    /// The engine, for programmatic scrolling and reconfiguration.
    pub fn grid_mut(&mut self) -> &mut GridVirtualizer {
        &mut self.grid
    }

    /// Mount or unmount the viewport. Returns whether it is now shown.
    pub fn toggle_display(&mut self) -> bool {
        let shown = {
            let mut slot = self.slot.borrow_mut();
            if slot.take().is_none() {
                let (width, height) = self.size;
                *slot = Some(Rc::new(Viewport::new(width, height)));
                true
            } else {
                false
            }
        };
        info!(shown, "Grid display toggled");
        self.sync();
        shown
    }

    /// Resize the viewport (if mounted) and notify both axes.
    pub fn resize(&mut self, width: u64, height: u64) {
        self.size = (width, height);
        if let Some(viewport) = self.viewport() {
            viewport.set_extent(Orientation::Horizontal, width);
            viewport.set_extent(Orientation::Vertical, height);
        }
        self.sync();
    }

    /// Scroll the mounted viewport by `delta` cells along `orientation`.
    ///
    /// No-op while hidden.
    pub fn scroll_by(&mut self, orientation: Orientation, delta: i64) {
        if let Some(viewport) = self.viewport() {
            viewport.scroll_by(orientation, delta);
            self.sync();
        }
    }

    /// Re-fit the content to the grid's total size and re-observe both axes.
    pub fn sync(&mut self) {
        if let Some(viewport) = self.viewport() {
            let total = self.grid.total_size();
            viewport.set_content_extent(Orientation::Vertical, total.rows);
            viewport.set_content_extent(Orientation::Horizontal, total.columns);
        }
        self.grid.rows_mut().sync();
        self.grid.columns_mut().sync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedConfig;

    fn rows_pane() -> ListPane {
        let mut pane =
            ListPane::new(ResolvedConfig::default().rows, Orientation::Vertical).unwrap();
        pane.resize(40, 20);
        pane
    }

    mod pane_enum {
        use super::*;

        #[test]
        fn next_and_prev_wrap() {
            assert_eq!(Pane::Rows.next(), Pane::Columns);
            assert_eq!(Pane::Grid.next(), Pane::Rows);
            assert_eq!(Pane::Rows.prev(), Pane::Grid);
            assert_eq!(Pane::Columns.prev(), Pane::Rows);
        }

        #[test]
        fn from_index_matches_index() {
            for pane in Pane::ALL {
                assert_eq!(Pane::from_index(pane.index()), Some(pane));
            }
            assert_eq!(Pane::from_index(3), None);
        }

        #[test]
        fn parses_names_case_insensitively() {
            assert_eq!("Grid".parse::<Pane>(), Ok(Pane::Grid));
            assert_eq!(" rows ".parse::<Pane>(), Ok(Pane::Rows));
            assert!("cells".parse::<Pane>().is_err());
        }
    }

    mod list {
        use super::*;

        #[test]
        fn content_matches_total_size() {
            let pane = rows_pane();
            assert_eq!(
                pane.viewport().content_extent(Orientation::Vertical),
                Some(10_000)
            );
            assert_eq!(
                pane.viewport().content_extent(Orientation::Horizontal),
                Some(40)
            );
        }

        #[test]
        fn resize_recomputes_window() {
            let mut pane = rows_pane();
            // 20 visible rows + 5 overscan below
            assert_eq!(pane.virtualizer().virtual_items().len(), 25);
            pane.resize(40, 10);
            assert_eq!(pane.virtualizer().virtual_items().len(), 15);
        }

        #[test]
        fn scroll_by_moves_window_and_clamps() {
            let mut pane = rows_pane();
            assert_eq!(pane.scroll_by(Orientation::Vertical, 100), ObservedChange::Moved);
            let visible = pane.virtualizer().visible_range().unwrap();
            assert_eq!((visible.start_index, visible.end_index), (100, 119));

            pane.scroll_by(Orientation::Vertical, i64::MAX);
            let state = pane.virtualizer().scroll_state().unwrap();
            assert_eq!(state.offset, 10_000 - 20);
        }

        #[test]
        fn count_change_refits_content() {
            let mut pane = rows_pane();
            pane.scroll_by(Orientation::Vertical, 9_000);
            pane.virtualizer_mut().set_count(100);
            pane.sync();
            assert_eq!(pane.viewport().content_extent(Orientation::Vertical), Some(100));
            assert_eq!(pane.virtualizer().scroll_state().unwrap().offset, 80);
        }
    }

    mod grid {
        use super::*;

        fn grid_pane() -> GridPane {
            let mut pane = GridPane::new(ResolvedConfig::default().grid).unwrap();
            pane.resize(60, 10);
            pane
        }

        #[test]
        fn starts_shown_and_bound() {
            let pane = grid_pane();
            assert!(pane.is_shown());
            assert!(pane.grid().rows().is_bound());
            assert!(pane.grid().columns().is_bound());
            // rows [0, 9] + 5, columns [0, 3] + 5
            assert_eq!(pane.grid().cell_count(), 15 * 9);
        }

        #[test]
        fn toggle_unbinds_both_axes() {
            let mut pane = grid_pane();
            assert!(!pane.toggle_display());
            assert!(!pane.is_shown());
            assert!(!pane.grid().rows().is_bound());
            assert!(!pane.grid().columns().is_bound());
            assert_eq!(pane.grid().cells().count(), 0);
            assert_eq!(pane.grid().total_size().rows, 10_000);
        }

        #[test]
        fn remount_starts_at_origin_with_last_size() {
            let mut pane = grid_pane();
            pane.scroll_by(Orientation::Vertical, 500);
            pane.toggle_display();
            pane.resize(30, 8);
            assert!(pane.toggle_display());

            let rows = pane.grid().rows().scroll_state().unwrap();
            assert_eq!(rows.offset, 0);
            assert_eq!(rows.viewport_extent, 8);
            let columns = pane.grid().columns().scroll_state().unwrap();
            assert_eq!(columns.viewport_extent, 30);
        }

        #[test]
        fn scroll_while_hidden_is_ignored() {
            let mut pane = grid_pane();
            pane.toggle_display();
            pane.scroll_by(Orientation::Vertical, 10);
            assert!(pane.grid().rows().scroll_state().is_none());
        }

        #[test]
        fn scroll_to_index_while_hidden_is_noop() {
            let mut pane = grid_pane();
            pane.toggle_display();
            pane.grid_mut().rows_mut().scroll_to_index(5_000, None).unwrap();
            assert!(pane.toggle_display());
            assert_eq!(pane.grid().rows().scroll_state().unwrap().offset, 0);
        }
    }
}
