//! TUI rendering and terminal management (impure shell)

pub mod clip;
pub mod constants;
pub mod layout;
pub mod panes;
mod styles;
pub mod tabs;

pub use styles::{ColorConfig, ItemStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::state::{handle_scroll_action, AppState, Pane};
use crate::view::constants::{MOUSE_SCROLL_CELLS, POLL_INTERVAL};
use crate::virtualizer::Orientation;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ItemStyles,
    /// Last rendered viewport area (for mouse hit testing)
    last_viewport: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, app_state))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: ItemStyles::new(),
            last_viewport: None,
        }
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after input or resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }
            // Layout (and therefore every viewport) is recomputed in draw.
            self.draw()?;
        }
    }

    /// Handle a keyboard event. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::NextPane => self.app_state.next_pane(),
            KeyAction::PrevPane => self.app_state.prev_pane(),
            KeyAction::SelectPane(index) => {
                if let Some(pane) = Pane::from_index(index) {
                    self.app_state.select_pane(pane);
                }
            }
            KeyAction::ToggleDisplay => {
                let shown = self.app_state.grid_mut().toggle_display();
                self.app_state.status = Some(if shown {
                    "Grid shown".to_string()
                } else {
                    "Grid hidden".to_string()
                });
            }
            scroll => handle_scroll_action(&mut self.app_state, scroll),
        }
        false
    }

    /// Handle a mouse event: wheel scrolls the active pane, a click reports
    /// the item under the pointer.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
        match mouse.kind {
            MouseEventKind::ScrollUp if shift => self.wheel(Orientation::Horizontal, -1),
            MouseEventKind::ScrollDown if shift => self.wheel(Orientation::Horizontal, 1),
            MouseEventKind::ScrollUp => self.wheel(Orientation::Vertical, -1),
            MouseEventKind::ScrollDown => self.wheel(Orientation::Vertical, 1),
            MouseEventKind::ScrollLeft => self.wheel(Orientation::Horizontal, -1),
            MouseEventKind::ScrollRight => self.wheel(Orientation::Horizontal, 1),
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn wheel(&mut self, orientation: Orientation, direction: i64) {
        // The columns pane only scrolls sideways; let the plain wheel drive it.
        let orientation = match self.app_state.active() {
            Pane::Columns => Orientation::Horizontal,
            _ => orientation,
        };
        self.app_state
            .scroll_active_by(orientation, direction * MOUSE_SCROLL_CELLS);
    }

    fn click(&mut self, column: u16, row: u16) {
        let Some(viewport) = self.last_viewport else {
            return;
        };
        if !viewport.contains(ratatui::layout::Position::new(column, row)) {
            return;
        }
        let dx = u64::from(column - viewport.x);
        let dy = u64::from(row - viewport.y);

        let state = &self.app_state;
        let hit = match state.active() {
            Pane::Rows => hit_list(state.rows().virtualizer(), dy).map(panes::row_label),
            Pane::Columns => hit_list(state.columns().virtualizer(), dx).map(panes::column_label),
            Pane::Grid => {
                let grid = state.grid().grid();
                match (grid.rows().scroll_state(), grid.columns().scroll_state()) {
                    (Some(rows), Some(columns)) => grid
                        .cell_at(columns.offset + dx, rows.offset + dy)
                        .map(|(r, c)| panes::cell_label(r, c)),
                    _ => None,
                }
            }
        };
        if let Some(label) = hit {
            info!(label = %label, "Item clicked");
            self.app_state.status = Some(format!("Clicked {label}"));
        }
    }

    /// Render the current frame
    ///
    /// Sizes every viewport from the layout and syncs the engines before drawing.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let layout = layout::calculate_layout(Rect::new(0, 0, size.width, size.height));
        self.app_state.resize(
            u64::from(layout.viewport.width),
            u64::from(layout.viewport.height),
        );
        self.last_viewport = Some(layout.viewport);

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;

        Ok(())
    }
}

/// Index of the item `delta` cells past the list's current offset.
fn hit_list(virtualizer: &crate::virtualizer::Virtualizer, delta: u64) -> Option<usize> {
    let scroll = virtualizer.scroll_state()?;
    virtualizer.item_at_offset(scroll.offset + delta)
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing with fixed, colored styles.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        let mut app = Self::with_terminal(terminal, app_state);
        app.styles = ItemStyles::with_color_config(ColorConfig::new(true));
        app
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== Benchmark Helpers =====
//
// Public wrappers for benchmarks when bench-internals feature is enabled.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking (benchmark-only constructor)
    pub fn new_for_bench(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self::new_for_test(terminal, app_state)
    }

    /// Handle a single keyboard event (benchmark-only accessor)
    pub fn handle_key_bench(&mut self, key: KeyEvent) -> bool {
        self.handle_key_test(key)
    }

    /// Render a single frame (benchmark-only accessor)
    pub fn render_bench(&mut self) -> Result<(), TuiError> {
        self.render_test()
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig, pane: Pane) -> Result<(), TuiError> {
    let mut app_state = AppState::new(config).map_err(AppError::from)?;
    app_state.select_pane(pane);

    let mut app = TuiApp::new(app_state)?;
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use ratatui::backend::TestBackend;

    fn create_test_app() -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(50, 16)).unwrap();
        let app_state = AppState::new(&ResolvedConfig::default()).unwrap();
        let mut app = TuiApp::new_for_test(terminal, app_state);
        app.render_test().unwrap();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn rows_offset(app: &TuiApp<TestBackend>) -> u64 {
        app.app_state()
            .rows()
            .virtualizer()
            .scroll_state()
            .unwrap()
            .offset
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_q_returns_true() {
        let mut app = create_test_app();
        assert!(app.handle_key_test(key(KeyCode::Char('q'))));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key_test(ctrl_c));
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut app = create_test_app();
        assert!(!app.handle_key_test(key(KeyCode::Char('z'))));
        assert_eq!(app.app_state().active(), Pane::Rows);
    }

    #[test]
    fn draw_sizes_viewports_from_layout() {
        let app = create_test_app();
        let scroll = app.app_state().rows().virtualizer().scroll_state().unwrap();
        assert_eq!(scroll.viewport_extent, 10);
        let columns = app
            .app_state()
            .columns()
            .virtualizer()
            .scroll_state()
            .unwrap();
        assert_eq!(columns.viewport_extent, 48);
    }

    #[test]
    fn tab_and_digits_switch_panes() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Tab));
        assert_eq!(app.app_state().active(), Pane::Columns);
        app.handle_key_test(key(KeyCode::Char('3')));
        assert_eq!(app.app_state().active(), Pane::Grid);
        app.handle_key_test(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.app_state().active(), Pane::Columns);
    }

    #[test]
    fn t_toggles_grid_and_reports_status() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('t')));
        assert!(!app.app_state().grid().is_shown());
        assert_eq!(app.app_state().status.as_deref(), Some("Grid hidden"));
        app.handle_key_test(key(KeyCode::Char('t')));
        assert!(app.app_state().grid().is_shown());
        assert_eq!(app.app_state().status.as_deref(), Some("Grid shown"));
    }

    #[test]
    fn j_scrolls_rows_and_repeat_events_count() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('j')));
        let mut repeat = key(KeyCode::Char('j'));
        repeat.kind = KeyEventKind::Repeat;
        app.handle_key_test(repeat);
        assert_eq!(rows_offset(&app), 2);
    }

    #[test]
    fn e_jumps_to_last_row() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('e')));
        let last = app
            .app_state()
            .rows()
            .virtualizer()
            .virtual_items()
            .last()
            .unwrap();
        assert_eq!(last.index, 9_999);
        assert_eq!(rows_offset(&app), 9_990);
    }

    #[test]
    fn wheel_scrolls_three_cells() {
        let mut app = create_test_app();
        app.handle_mouse_test(mouse(MouseEventKind::ScrollDown, 5, 5));
        assert_eq!(rows_offset(&app), 3);
        app.handle_mouse_test(mouse(MouseEventKind::ScrollUp, 5, 5));
        assert_eq!(rows_offset(&app), 0);
    }

    #[test]
    fn wheel_on_columns_pane_scrolls_sideways() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('2')));
        app.handle_mouse_test(mouse(MouseEventKind::ScrollDown, 5, 5));
        let columns = app
            .app_state()
            .columns()
            .virtualizer()
            .scroll_state()
            .unwrap();
        assert_eq!(columns.offset, 3);
    }

    #[test]
    fn click_reports_row_under_pointer() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::PageDown));
        // viewport starts at (1, 4); row 2 of the viewport is item 12
        app.handle_mouse_test(mouse(MouseEventKind::Down(MouseButton::Left), 3, 6));
        assert_eq!(app.app_state().status.as_deref(), Some("Clicked Row 13"));
    }

    #[test]
    fn click_reports_grid_cell() {
        let mut app = create_test_app();
        app.handle_key_test(key(KeyCode::Char('3')));
        app.handle_mouse_test(mouse(MouseEventKind::Down(MouseButton::Left), 1 + 20, 4 + 3));
        assert_eq!(app.app_state().status.as_deref(), Some("Clicked Cell 3, 1"));
    }

    #[test]
    fn click_outside_viewport_is_ignored() {
        let mut app = create_test_app();
        app.handle_mouse_test(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(app.app_state().status, None);
    }

    #[test]
    fn resized_terminal_resizes_viewports_on_next_draw() {
        let mut app = create_test_app();
        app.terminal.backend_mut().resize(30, 12);
        app.render_test().unwrap();
        let scroll = app.app_state().rows().virtualizer().scroll_state().unwrap();
        assert_eq!(scroll.viewport_extent, 6);
        assert_eq!(app.app_state().rows().virtualizer().virtual_items().len(), 11);
    }
}
