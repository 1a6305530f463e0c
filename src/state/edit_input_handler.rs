//! Inline edit key handling (pure state transitions).
//!
//! Active while the engine has an edit target and the search bar does not
//! have focus.

use crate::state::edit::EditInput;
use crate::state::engine::Action;
use crate::state::AppState;

/// Feed a keystroke to the draft. No-op when not editing.
pub fn handle_edit_input(state: &mut AppState, input: EditInput) {
    if !state.is_editing() {
        return;
    }
    state.dispatch(Action::EditInput(input));
}

/// Commit the draft and leave edit mode.
pub fn save_edit(state: &mut AppState) {
    let target = state.engine().edit_mode().target().cloned();
    if let Some(id) = target {
        state.dispatch(Action::Save(id));
    }
}

/// Discard the draft and leave edit mode.
pub fn cancel_edit(state: &mut AppState) {
    if state.is_editing() {
        state.dispatch(Action::CancelEdit);
    }
}
