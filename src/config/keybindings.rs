//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Only consulted while the table has
/// focus; search and edit input are handled before lookup.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Row cursor
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::CursorDown);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::CursorUp);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::CursorDown);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::CursorUp);

        // Pages
        bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::FirstPage);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::LastPage);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::FirstPage);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::LastPage);

        // Direct page selection
        for digit in 1..=9u8 {
            bind(
                KeyCode::Char(char::from(b'0' + digit)),
                KeyModifiers::NONE,
                KeyAction::GoToPage(usize::from(digit)),
            );
        }

        // Selection
        bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleSelect);
        bind(KeyCode::Char('a'), KeyModifiers::NONE, KeyAction::ToggleSelectPage);
        bind(KeyCode::Char('x'), KeyModifiers::NONE, KeyAction::ClearSelection);

        // Row actions
        bind(KeyCode::Char('e'), KeyModifiers::NONE, KeyAction::BeginEdit);
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::BeginEdit);
        bind(KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::DeleteRow);
        bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::DeleteRow);
        bind(KeyCode::Char('D'), KeyModifiers::SHIFT, KeyAction::DeleteSelected);

        // Search
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);

        // Application controls
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);

        Self { bindings }
    }
}
