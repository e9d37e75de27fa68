//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the active pane up by one item. Default: k/↑
    ScrollUp,
    /// Scroll the active pane down by one item. Default: j/↓
    ScrollDown,
    /// Scroll the active pane left by one item. Default: h/←
    ScrollLeft,
    /// Scroll the active pane right by one item. Default: l/→
    ScrollRight,
    /// Scroll back by one viewport. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll forward by one viewport. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first item. Default: g/Home
    ScrollToTop,
    /// Jump to the last item. Default: G/End
    ScrollToBottom,

    // Programmatic scrolling
    /// Scroll the active pane's primary axis to the halfway index. Default: m
    ScrollToHalfway,
    /// Scroll the active pane's primary axis to the last index. Default: e
    ScrollToLast,

    // Pane navigation
    /// Switch to the next demo pane. Default: Tab
    NextPane,
    /// Switch to the previous demo pane. Default: Shift+Tab
    PrevPane,
    /// Select a demo pane by position (0 = rows, 1 = columns, 2 = grid). Default: 1-3
    SelectPane(usize),

    // Grid
    /// Mount or unmount the grid viewport. Default: t
    ToggleDisplay,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action moves a scroll offset directly.
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::ScrollLeft
                | KeyAction::ScrollRight
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_actions_are_scroll() {
        for action in [
            KeyAction::ScrollUp,
            KeyAction::ScrollDown,
            KeyAction::ScrollLeft,
            KeyAction::ScrollRight,
            KeyAction::PageUp,
            KeyAction::PageDown,
            KeyAction::ScrollToTop,
            KeyAction::ScrollToBottom,
        ] {
            assert!(action.is_scroll(), "{:?} should be a scroll action", action);
        }
    }

    #[test]
    fn programmatic_jumps_are_not_plain_scrolls() {
        assert!(!KeyAction::ScrollToHalfway.is_scroll());
        assert!(!KeyAction::ScrollToLast.is_scroll());
    }

    #[test]
    fn select_pane_discriminates_by_index() {
        assert_ne!(KeyAction::SelectPane(0), KeyAction::SelectPane(1));
        assert_eq!(KeyAction::SelectPane(2), KeyAction::SelectPane(2));
    }

    #[test]
    fn toggle_display_not_equals_quit() {
        assert_ne!(KeyAction::ToggleDisplay, KeyAction::Quit);
    }
}
