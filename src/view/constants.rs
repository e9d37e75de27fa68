//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for the range readout and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Cells scrolled per mouse wheel notch.
///
/// Not a multiple of the default column width, so columns end up partially
/// clipped at the viewport edges.
pub const MOUSE_SCROLL_CELLS: i64 = 3;

/// How long the event loop waits for input before polling again.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
