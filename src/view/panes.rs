//! Rendering of virtual items into the content area.
//!
//! Each item is drawn as its own paragraph at the screen position derived
//! from its absolute offset. Items straddling the viewport edge are drawn
//! partially: the paragraph is shrunk to the visible cells and its text
//! scrolled by the hidden amount.

use crate::state::{GridPane, ListPane};
use crate::view::clip::{center, clip, Clip};
use crate::view::ItemStyles;
use crate::virtualizer::{Orientation, ScrollState, VirtualItem};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Label of list item `index`, counted from one.
pub fn row_label(index: usize) -> String {
    format!("Row {}", index + 1)
}

/// Label of column item `index`, counted from one.
pub fn column_label(index: usize) -> String {
    format!("Column {}", index + 1)
}

/// Label of grid cell `(row, column)`, zero-based.
pub fn cell_label(row: usize, column: usize) -> String {
    format!("Cell {row}, {column}")
}

/// Clip `item` against the window described by `scroll`.
fn clip_item(item: &VirtualItem, scroll: ScrollState) -> Option<Clip> {
    clip(item.start, item.size, scroll.offset, scroll.viewport_extent)
}

/// Render a vertical or horizontal list.
pub fn render_list(frame: &mut Frame, area: Rect, pane: &ListPane, styles: &ItemStyles) {
    let virtualizer = pane.virtualizer();
    let Some(scroll) = virtualizer.scroll_state() else {
        return;
    };
    let orientation = virtualizer.orientation();

    for item in virtualizer.virtual_items() {
        let Some(visible) = clip_item(&item, scroll) else {
            continue;
        };
        let style = styles.for_index(item.index);
        let (rect, paragraph) = match orientation {
            Orientation::Vertical => (
                Rect::new(area.x, area.y + visible.screen, area.width, visible.len),
                Paragraph::new(format!(" {}", row_label(item.index))).scroll((visible.skip, 0)),
            ),
            Orientation::Horizontal => (
                Rect::new(area.x + visible.screen, area.y, visible.len, area.height),
                Paragraph::new(center(&column_label(item.index), item.size))
                    .scroll((0, visible.skip)),
            ),
        };
        frame.render_widget(paragraph.style(style), rect.intersection(area));
    }
}

/// Render the grid, or a placeholder while its viewport is unmounted.
pub fn render_grid(frame: &mut Frame, area: Rect, pane: &GridPane, styles: &ItemStyles) {
    let grid = pane.grid();
    let (Some(rows), Some(columns)) = (grid.rows().scroll_state(), grid.columns().scroll_state())
    else {
        let placeholder = Paragraph::new("Grid hidden. Press t to show it again.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    };

    for cell in grid.cells() {
        let (Some(y), Some(x)) = (clip_item(&cell.row, rows), clip_item(&cell.column, columns))
        else {
            continue;
        };
        let rect = Rect::new(area.x + x.screen, area.y + y.screen, x.len, y.len);
        let label = center(&cell_label(cell.row.index, cell.column.index), cell.width());
        let paragraph = Paragraph::new(label)
            .scroll((y.skip, x.skip))
            .style(styles.for_cell(cell.row.index, cell.column.index));
        frame.render_widget(paragraph, rect.intersection(area));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_labels_count_from_one() {
        assert_eq!(row_label(0), "Row 1");
        assert_eq!(column_label(9_999), "Column 10000");
    }

    #[test]
    fn cell_labels_are_zero_based() {
        assert_eq!(cell_label(0, 0), "Cell 0, 0");
        assert_eq!(cell_label(9_999, 12), "Cell 9999, 12");
    }
}
