//! Table action handler.
//!
//! Translates table-focused key actions into cursor moves and engine
//! actions. Row-level actions apply to the highlighted row.

use crate::model::KeyAction;
use crate::state::engine::Action;
use crate::state::AppState;
use tracing::debug;

/// Handle a key action while the table has focus.
///
/// Quit, Help and StartSearch are routed by the caller and ignored here.
pub fn handle_table_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::CursorUp => state.cursor_up(),
        KeyAction::CursorDown => state.cursor_down(),

        KeyAction::PrevPage => state.dispatch(Action::PrevPage),
        KeyAction::NextPage => state.dispatch(Action::NextPage),
        KeyAction::FirstPage => state.dispatch(Action::FirstPage),
        KeyAction::LastPage => state.dispatch(Action::LastPage),
        KeyAction::GoToPage(page) => state.dispatch(Action::GoToPage(page)),

        KeyAction::ToggleSelect => {
            if let Some(id) = state.highlighted_id() {
                state.dispatch(Action::ToggleSelect(id));
            }
        }
        KeyAction::ToggleSelectPage => state.dispatch(Action::ToggleSelectPage),
        KeyAction::ClearSelection => state.dispatch(Action::ClearSelection),

        KeyAction::BeginEdit => {
            if let Some(id) = state.highlighted_id() {
                debug!(id = %id, "Begin edit");
                state.dispatch(Action::BeginEdit(id));
            }
        }

        KeyAction::DeleteRow => {
            if let Some(id) = state.highlighted_id() {
                debug!(id = %id, "Delete row");
                state.dispatch(Action::Delete(id));
            }
        }
        KeyAction::DeleteSelected => {
            debug!(count = state.engine().selection().len(), "Delete selected rows");
            state.dispatch(Action::DeleteSelected);
        }

        KeyAction::StartSearch | KeyAction::Quit | KeyAction::Help => {}
    }
}

#[cfg(test)]
#[path = "table_handler_tests.rs"]
mod tests;
