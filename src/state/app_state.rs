//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It wraps the
//! record view engine with presentation-only state: which pane has focus,
//! which row is highlighted, the search input buffer and overlay flags.

use super::display::{self, DisplayModel};
use super::engine::{reduce, Action, EngineState};
use super::text_input::TextInput;
use crate::model::{Record, RecordId};
use std::num::NonZeroUsize;

// ===== FocusPane =====

/// Where keyboard input goes.
///
/// Editing is not a focus of its own: while the engine has an edit target
/// and the search bar is not focused, keys go to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Record table (navigation, selection, actions).
    #[default]
    Table,
    /// Search input.
    Search,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Focus**: Table ⇄ Search (`/` enters, Enter/Esc leaves)
/// - **Edit**: Idle → Editing (`e`/Enter on a row) → Idle (Enter saves, Esc cancels,
///   deleting the row also ends it)
/// - **Loading**: true until the loader reports, whatever the outcome
#[derive(Debug, Clone)]
pub struct AppState {
    engine: EngineState,

    /// Which pane receives keyboard input.
    pub focus: FocusPane,

    /// Search bar contents. Mirrors the engine query on every keystroke.
    search: TextInput,

    /// Highlighted row, as an index into the visible page.
    cursor: usize,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Whether the initial load is still outstanding.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EngineState::default())
    }
}

impl AppState {
    /// Create new AppState around an engine.
    pub fn new(engine: EngineState) -> Self {
        let search = TextInput::with_value(engine.query());
        Self {
            engine,
            focus: FocusPane::Table,
            search,
            cursor: 0,
            help_visible: false,
            loading: false,
        }
    }

    /// Empty state with a configured page size, waiting for the loader.
    pub fn waiting_for_load(page_size: NonZeroUsize) -> Self {
        Self {
            loading: true,
            ..Self::new(EngineState::new(page_size))
        }
    }

    /// Convenience for tests and callers that already hold the records.
    pub fn with_records(records: Vec<Record>, page_size: NonZeroUsize) -> Self {
        Self::new(EngineState::with_records(records, page_size))
    }

    /// Immutable view of the engine.
    pub fn engine(&self) -> &EngineState {
        &self.engine
    }

    /// Apply an engine action and keep the cursor on a visible row.
    pub fn dispatch(&mut self, action: Action) {
        let rows_replaced = matches!(action, Action::Loaded(_) | Action::SetQuery(_));
        let page_before = self.engine.page();

        let engine = std::mem::take(&mut self.engine);
        self.engine = reduce(engine, action);

        // New page or new row set: start from the top row
        if rows_replaced || self.engine.page() != page_before {
            self.cursor = 0;
        }
        if self.search.value() != self.engine.query() {
            self.search = TextInput::with_value(self.engine.query());
        }
        self.clamp_cursor();
    }

    /// Display description for the current frame.
    pub fn display(&self) -> DisplayModel {
        display::describe(&self.engine)
    }

    // ===== Cursor =====

    /// Highlighted row index within the page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Id of the highlighted row, if the page has any rows.
    pub fn highlighted_id(&self) -> Option<RecordId> {
        self.engine
            .visible()
            .get(self.cursor)
            .map(|r| r.id().clone())
    }

    /// Move the highlight up. Saturates at the first row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the highlight down. Stops at the last visible row.
    pub fn cursor_down(&mut self) {
        let rows = self.engine.visible().len();
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        let rows = self.engine.visible().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    // ===== Search =====

    /// Search bar contents.
    pub fn search(&self) -> &TextInput {
        &self.search
    }

    /// Replace the search buffer and push its value to the engine.
    pub(crate) fn set_search(&mut self, search: TextInput) {
        let changed = search.value() != self.engine.query();
        let query = search.value().to_string();
        self.search = search;
        if changed {
            self.dispatch(Action::SetQuery(query));
        }
    }

    // ===== Editing =====

    /// Whether a row is under edit.
    pub fn is_editing(&self) -> bool {
        self.engine.edit_mode().target().is_some()
    }

    // ===== Help =====

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
