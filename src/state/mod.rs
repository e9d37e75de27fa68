//! UI state machine.
//!
//! State transitions are plain methods and functions testable without a terminal.

pub mod app_state;
pub mod pane;
pub mod scroll_handler;

pub use app_state::AppState;
pub use pane::{GridPane, ListPane, Pane, UnknownPane};
pub use scroll_handler::handle_scroll_action;
