//! Pane tab bar widget.
//!
//! Displays one tab per demo pane using ratatui's Tabs widget.
//! Selection state is managed by `AppState::active`.

use crate::state::Pane;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the pane tab bar with `active` highlighted.
///
/// Tabs are numbered to match their `1`-`3` shortcuts.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: Pane) {
    let titles: Vec<Line> = Pane::ALL
        .iter()
        .map(|pane| Line::from(format!("{} {}", pane.index() + 1, pane.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("virtscroll"),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(active.index());

    frame.render_widget(tabs, area);
}
