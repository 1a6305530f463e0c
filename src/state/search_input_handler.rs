//! Search input handling (pure state transitions).
//!
//! Every keystroke updates the search buffer and re-filters immediately;
//! there is no separate submit step for the query itself. Enter only hands
//! focus back to the table.

use crate::state::{AppState, FocusPane};

/// Activate search input mode.
/// Moves focus to the search bar, keeping any existing query.
///
/// No-op while a row is under edit.
pub fn activate_search_input(state: &mut AppState) {
    if state.is_editing() {
        return;
    }
    state.focus = FocusPane::Search;
}

/// Handle character input when the search bar has focus.
/// Inserts the character at cursor position and re-filters.
pub fn handle_char_input(state: &mut AppState, ch: char) {
    if state.focus != FocusPane::Search {
        return;
    }
    let search = state.search().clone().insert(ch);
    state.set_search(search);
}

/// Handle backspace when the search bar has focus.
/// Deletes character before cursor if cursor > 0.
pub fn handle_backspace(state: &mut AppState) {
    if state.focus != FocusPane::Search {
        return;
    }
    let search = state.search().clone().backspace();
    state.set_search(search);
}

/// Move search cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(state: &mut AppState) {
    if state.focus != FocusPane::Search {
        return;
    }
    let search = state.search().clone().left();
    state.set_search(search);
}

/// Move search cursor right by one position. Saturates at query length.
pub fn handle_cursor_right(state: &mut AppState) {
    if state.focus != FocusPane::Search {
        return;
    }
    let search = state.search().clone().right();
    state.set_search(search);
}

/// Submit search: keep the query, return focus to the table.
pub fn submit_search(state: &mut AppState) {
    state.focus = FocusPane::Table;
}

/// Cancel search: clear the query and return focus to the table.
pub fn cancel_search(state: &mut AppState) {
    state.set_search(crate::state::TextInput::new());
    state.focus = FocusPane::Table;
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
