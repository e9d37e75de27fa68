//! Two-dimensional composition of two single-axis virtualizers.
//!
//! A grid is the cross product of a vertical (row) axis and a horizontal
//! (column) axis. There is no 2-D range logic here: each axis computes its own
//! range and the grid only pairs the results, row-major.

use super::axis::Virtualizer;
use super::item::{VirtualItem, VirtualItems};
use super::types::Orientation;
use crate::model::VirtualizerError;

/// One cell of a grid: a row item paired with a column item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Item on the row (vertical) axis.
    pub row: VirtualItem,
    /// Item on the column (horizontal) axis.
    pub column: VirtualItem,
}

impl GridCell {
    /// Horizontal offset of the cell's leading edge.
    pub fn x(&self) -> u64 {
        self.column.start
    }

    /// Vertical offset of the cell's leading edge.
    pub fn y(&self) -> u64 {
        self.row.start
    }

    /// Cell width (the column size).
    pub fn width(&self) -> u64 {
        self.column.size
    }

    /// Cell height (the row size).
    pub fn height(&self) -> u64 {
        self.row.size
    }
}

/// Total scrollable extent of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridSize {
    /// Total size of the row axis (content height).
    pub rows: u64,
    /// Total size of the column axis (content width).
    pub columns: u64,
}

/// Row-major lazy iterator over the cells of a [`GridVirtualizer`].
#[derive(Debug, Clone)]
pub struct GridCells {
    rows: VirtualItems,
    columns: VirtualItems,
    current_row: Option<VirtualItem>,
    remaining_columns: VirtualItems,
}

impl GridCells {
    fn new(mut rows: VirtualItems, columns: VirtualItems) -> Self {
        let current_row = if columns.len() == 0 { None } else { rows.next() };
        Self {
            rows,
            remaining_columns: columns.clone(),
            columns,
            current_row,
        }
    }
}

impl Iterator for GridCells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        loop {
            let row = self.current_row?;
            if let Some(column) = self.remaining_columns.next() {
                return Some(GridCell { row, column });
            }
            self.current_row = self.rows.next();
            self.remaining_columns = self.columns.clone();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.current_row {
            Some(_) => self
                .rows
                .len()
                .saturating_mul(self.columns.len())
                .saturating_add(self.remaining_columns.len()),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridCells {}

/// Pairs a row virtualizer and a column virtualizer.
///
/// Holds no scroll state of its own. The host delivers scroll/resize
/// notifications to each axis through [`rows_mut`](Self::rows_mut) and
/// [`columns_mut`](Self::columns_mut); the grid only reads them.
#[derive(Debug)]
pub struct GridVirtualizer {
    rows: Virtualizer,
    columns: Virtualizer,
}

impl GridVirtualizer {
    /// Compose a grid from a vertical and a horizontal virtualizer.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `rows` is not vertical or `columns` is not horizontal.
    pub fn new(rows: Virtualizer, columns: Virtualizer) -> Result<Self, VirtualizerError> {
        if rows.orientation() != Orientation::Vertical {
            return Err(VirtualizerError::invalid("grid rows must be vertical"));
        }
        if columns.orientation() != Orientation::Horizontal {
            return Err(VirtualizerError::invalid("grid columns must be horizontal"));
        }
        Ok(Self { rows, columns })
    }

    /// Row axis.
    pub fn rows(&self) -> &Virtualizer {
        &self.rows
    }

    /// Column axis.
    pub fn columns(&self) -> &Virtualizer {
        &self.columns
    }

    /// Row axis, for delivering events and configuration changes.
    pub fn rows_mut(&mut self) -> &mut Virtualizer {
        &mut self.rows
    }

    /// Column axis, for delivering events and configuration changes.
    pub fn columns_mut(&mut self) -> &mut Virtualizer {
        &mut self.columns
    }

    /// `(rows.total_size(), columns.total_size())`.
    pub fn total_size(&self) -> GridSize {
        GridSize {
            rows: self.rows.total_size(),
            columns: self.columns.total_size(),
        }
    }

    /// Cells of the current row and column windows, row-major.
    pub fn cells(&self) -> GridCells {
        GridCells::new(self.rows.virtual_items(), self.columns.virtual_items())
    }

    /// `rows.virtual_items().len() * columns.virtual_items().len()`.
    pub fn cell_count(&self) -> usize {
        self.rows
            .virtual_items()
            .len()
            .saturating_mul(self.columns.virtual_items().len())
    }

    /// `(row, column)` indices of the cell under absolute offsets `(x, y)`.
    pub fn cell_at(&self, x: u64, y: u64) -> Option<(usize, usize)> {
        Some((self.rows.item_at_offset(y)?, self.columns.item_at_offset(x)?))
    }
}
