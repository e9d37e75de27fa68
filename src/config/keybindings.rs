//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup; event kind and
    /// state reported by the terminal are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Vim-style scrolling
        keys.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('h'), none, KeyAction::ScrollLeft);
        keys.bind(KeyCode::Char('l'), none, KeyAction::ScrollRight);
        keys.bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);

        // Arrow keys
        keys.bind(KeyCode::Up, none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Left, none, KeyAction::ScrollLeft);
        keys.bind(KeyCode::Right, none, KeyAction::ScrollRight);
        keys.bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, none, KeyAction::PageUp);

        // Programmatic jumps
        keys.bind(KeyCode::Char('m'), none, KeyAction::ScrollToHalfway);
        keys.bind(KeyCode::Char('e'), none, KeyAction::ScrollToLast);

        // Pane selection
        keys.bind(KeyCode::Tab, none, KeyAction::NextPane);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevPane);
        keys.bind(KeyCode::Char('1'), none, KeyAction::SelectPane(0));
        keys.bind(KeyCode::Char('2'), none, KeyAction::SelectPane(1));
        keys.bind(KeyCode::Char('3'), none, KeyAction::SelectPane(2));

        keys.bind(KeyCode::Char('t'), none, KeyAction::ToggleDisplay);

        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);

        keys
    }
}
