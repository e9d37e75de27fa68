//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state: which pane is
//! active, and each pane's viewport and virtualizer.

use crate::config::ResolvedConfig;
use crate::model::VirtualizerError;
use crate::state::pane::{GridPane, ListPane, Pane};
use crate::virtualizer::{Orientation, Virtualizer};
use tracing::debug;

/// Application state.
///
/// # State Machine
///
/// - **Active pane**: Rows ⇄ Columns ⇄ Grid (via `select_pane`, `next_pane`, `prev_pane`)
/// - **Grid display**: Shown ⇄ Hidden (via `GridPane::toggle_display`)
///
/// Every pane is resized on each frame, inactive ones included, so switching
/// tabs never shows a stale window.
#[derive(Debug)]
pub struct AppState {
    active: Pane,
    rows: ListPane,
    columns: ListPane,
    grid: GridPane,
    /// One-line message shown in the status bar (last jump, rejected index).
    pub status: Option<String>,
}

impl AppState {
    /// Build all three panes from resolved configuration.
    ///
    /// # Errors
    /// `InvalidConfiguration` if any configured item size is zero.
    pub fn new(config: &ResolvedConfig) -> Result<Self, VirtualizerError> {
        Ok(Self {
            active: Pane::default(),
            rows: ListPane::new(config.rows, Orientation::Vertical)?,
            columns: ListPane::new(config.columns, Orientation::Horizontal)?,
            grid: GridPane::new(config.grid)?,
            status: None,
        })
    }

    /// Currently active pane.
    pub fn active(&self) -> Pane {
        self.active
    }

    /// Make `pane` the active pane.
    pub fn select_pane(&mut self, pane: Pane) {
        if self.active != pane {
            debug!(from = %self.active, to = %pane, "Pane selected");
        }
        self.active = pane;
    }

    /// Activate the next pane in tab order.
    pub fn next_pane(&mut self) {
        self.select_pane(self.active.next());
    }

    /// Activate the previous pane in tab order.
    pub fn prev_pane(&mut self) {
        self.select_pane(self.active.prev());
    }

    /// Vertical list pane.
    pub fn rows(&self) -> &ListPane {
        &self.rows
    }

    /// Vertical list pane, mutable.
    pub fn rows_mut(&mut self) -> &mut ListPane {
        &mut self.rows
    }

    /// Horizontal list pane.
    pub fn columns(&self) -> &ListPane {
        &self.columns
    }

    /// Horizontal list pane, mutable.
    pub fn columns_mut(&mut self) -> &mut ListPane {
        &mut self.columns
    }

    /// Grid pane.
    pub fn grid(&self) -> &GridPane {
        &self.grid
    }

    /// Grid pane, mutable.
    pub fn grid_mut(&mut self) -> &mut GridPane {
        &mut self.grid
    }

    /// Axis that jumps and paging act on in the active pane.
    ///
    /// The grid's primary axis is its rows.
    pub fn primary_axis(&self) -> &Virtualizer {
        match self.active {
            Pane::Rows => self.rows.virtualizer(),
            Pane::Columns => self.columns.virtualizer(),
            Pane::Grid => self.grid.grid().rows(),
        }
    }

    /// Mutable access to [`primary_axis`](Self::primary_axis).
    pub fn primary_axis_mut(&mut self) -> &mut Virtualizer {
        match self.active {
            Pane::Rows => self.rows.virtualizer_mut(),
            Pane::Columns => self.columns.virtualizer_mut(),
            Pane::Grid => self.grid.grid_mut().rows_mut(),
        }
    }

    /// Resize every pane's viewport to `width` x `height` cells.
    pub fn resize(&mut self, width: u64, height: u64) {
        self.rows.resize(width, height);
        self.columns.resize(width, height);
        self.grid.resize(width, height);
    }

    /// Scroll the active pane's viewport by `delta` cells.
    ///
    /// List panes ignore deltas across their axis.
    pub fn scroll_active_by(&mut self, orientation: Orientation, delta: i64) {
        match self.active {
            Pane::Rows if orientation == Orientation::Vertical => {
                self.rows.scroll_by(orientation, delta);
            }
            Pane::Columns if orientation == Orientation::Horizontal => {
                self.columns.scroll_by(orientation, delta);
            }
            Pane::Grid => self.grid.scroll_by(orientation, delta),
            Pane::Rows | Pane::Columns => {}
        }
    }

    /// Re-fit and re-observe every pane.
    pub fn sync(&mut self) {
        self.rows.sync();
        self.columns.sync();
        self.grid.sync();
    }
}
