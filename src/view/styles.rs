//! Item styling.
//!
//! Alternating backgrounds make item boundaries visible, which is the whole
//! point of a virtualization demo: you can watch items enter and leave.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the environment.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Explicitly enabled or disabled colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ItemStyles =====

/// Styles for even and odd items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStyles {
    even: Style,
    odd: Style,
}

impl ItemStyles {
    /// Create item styles honoring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }

    /// Create item styles with the given color configuration.
    ///
    /// Without colors, odd items are rendered reversed instead.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                even: Style::default().fg(Color::White).bg(Color::DarkGray),
                odd: Style::default().fg(Color::Black).bg(Color::Gray),
            }
        } else {
            Self {
                even: Style::default(),
                odd: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Style for list item `index`.
    pub fn for_index(&self, index: usize) -> Style {
        if index % 2 == 1 {
            self.odd
        } else {
            self.even
        }
    }

    /// Style for grid cell `(row, column)`: a checkerboard.
    pub fn for_cell(&self, row: usize, column: usize) -> Style {
        self.for_index(row ^ column)
    }
}

impl Default for ItemStyles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colored() -> ItemStyles {
        ItemStyles::with_color_config(ColorConfig::new(true))
    }

    #[test]
    fn list_items_alternate() {
        let styles = colored();
        assert_eq!(styles.for_index(0), styles.for_index(2));
        assert_ne!(styles.for_index(0), styles.for_index(1));
    }

    #[test]
    fn grid_cells_form_checkerboard() {
        let styles = colored();
        assert_eq!(styles.for_cell(0, 0), styles.for_index(0));
        assert_eq!(styles.for_cell(0, 1), styles.for_index(1));
        assert_eq!(styles.for_cell(1, 0), styles.for_index(1));
        assert_eq!(styles.for_cell(1, 1), styles.for_index(0));
        assert_eq!(styles.for_cell(4, 7), styles.for_index(1));
    }

    #[test]
    fn disabled_colors_still_distinguish_parity() {
        let styles = ItemStyles::with_color_config(ColorConfig::new(false));
        assert_eq!(styles.for_index(0), Style::default());
        assert!(styles.for_index(1).add_modifier.contains(Modifier::REVERSED));
    }
}
