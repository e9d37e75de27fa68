//! Screen layout: tab bar, bordered content viewport, status bar.

use crate::state::{AppState, Pane};
use crate::view::constants::{STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};
use crate::view::{panes, tabs, ItemStyles};
use crate::virtualizer::{VisibleRange, Virtualizer};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Tab bar at the top.
    pub tabs: Rect,
    /// Bordered block around the active pane.
    pub content: Rect,
    /// Inside of the content block; this is the scroll viewport.
    pub viewport: Rect,
    /// Status bar at the bottom.
    pub status: Rect,
}

/// Split `area` into tab bar, content and status bar.
pub fn calculate_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let content = chunks[1];
    ScreenLayout {
        tabs: chunks[0],
        content,
        viewport: Block::default().borders(Borders::ALL).inner(content),
        status: chunks[2],
    }
}

/// Render the whole frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &ItemStyles) {
    let layout = calculate_layout(frame.area());

    tabs::render_tab_bar(frame, layout.tabs, state.active());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.active().title());
    frame.render_widget(block, layout.content);

    match state.active() {
        Pane::Rows => panes::render_list(frame, layout.viewport, state.rows(), styles),
        Pane::Columns => panes::render_list(frame, layout.viewport, state.columns(), styles),
        Pane::Grid => panes::render_grid(frame, layout.viewport, state.grid(), styles),
    }

    render_status_bar(frame, layout.status, state);
}

fn format_range(range: Option<VisibleRange>) -> String {
    match range {
        Some(range) => format!("{}-{}", range.start_index, range.end_index),
        None => "none".to_string(),
    }
}

fn axis_summary(virtualizer: &Virtualizer) -> String {
    format!(
        "visible {} rendered {} of {}",
        format_range(virtualizer.visible_range()),
        format_range(virtualizer.range()),
        virtualizer.count()
    )
}

/// Status bar text: range readout for the active pane plus the latest message.
pub fn status_text(state: &AppState) -> String {
    let readout = match state.active() {
        Pane::Rows => axis_summary(state.rows().virtualizer()),
        Pane::Columns => axis_summary(state.columns().virtualizer()),
        Pane::Grid => {
            let grid = state.grid().grid();
            let size = grid.total_size();
            if state.grid().is_shown() {
                format!(
                    "rows {} cols {} | {} cells | {}x{}",
                    format_range(grid.rows().range()),
                    format_range(grid.columns().range()),
                    grid.cell_count(),
                    size.columns,
                    size.rows
                )
            } else {
                format!("hidden | {}x{}", size.columns, size.rows)
            }
        }
    };

    match &state.status {
        Some(message) => format!(" {readout} | {message}"),
        None => format!(" {readout} | q quit, t toggle grid, m/e jump"),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = Paragraph::new(status_text(state))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedConfig;

    fn state(pane: Pane) -> AppState {
        let mut state = AppState::new(&ResolvedConfig::default()).unwrap();
        let layout = calculate_layout(Rect::new(0, 0, 50, 16));
        state.resize(
            u64::from(layout.viewport.width),
            u64::from(layout.viewport.height),
        );
        state.select_pane(pane);
        state
    }

    #[test]
    fn layout_reserves_bars_and_border() {
        let layout = calculate_layout(Rect::new(0, 0, 50, 16));
        assert_eq!(layout.tabs, Rect::new(0, 0, 50, 3));
        assert_eq!(layout.content, Rect::new(0, 3, 50, 12));
        assert_eq!(layout.viewport, Rect::new(1, 4, 48, 10));
        assert_eq!(layout.status, Rect::new(0, 15, 50, 1));
    }

    #[test]
    fn status_for_rows_shows_visible_and_rendered_ranges() {
        let text = status_text(&state(Pane::Rows));
        assert_eq!(
            text,
            " visible 0-9 rendered 0-14 of 10000 | q quit, t toggle grid, m/e jump"
        );
    }

    #[test]
    fn status_for_grid_shows_cell_count() {
        let text = status_text(&state(Pane::Grid));
        assert!(text.starts_with(" rows 0-14 cols 0-7 | 120 cells | 160000x10000"), "got: {text}");
    }

    #[test]
    fn status_for_hidden_grid() {
        let mut state = state(Pane::Grid);
        state.grid_mut().toggle_display();
        state.status = Some("Grid hidden".to_string());
        assert_eq!(status_text(&state), " hidden | 160000x10000 | Grid hidden");
    }
}
