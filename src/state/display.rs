//! Display description of the engine state.
//!
//! `describe` turns engine state into plain data a presentation layer can
//! draw without knowing about the engine: the visible rows with their
//! flags, the page bar, and the counters. No styling lives here.

use super::edit::EditDraft;
use super::engine::EngineState;
use super::text_input::TextInput;
use crate::model::{EditableField, Record, RecordId};

/// Everything needed to draw one frame of the record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    /// Current search query.
    pub query: String,
    /// Rows of the current page.
    pub rows: Vec<DisplayRow>,
    /// Page navigation bar.
    pub pages: PageBar,
    /// Records in the collection.
    pub total_records: usize,
    /// Records matching the query.
    pub total_matches: usize,
    /// Ids in the selection set.
    pub selected_count: usize,
    /// Bulk delete is offered whenever something is selected.
    pub bulk_delete_enabled: bool,
}

/// One visible table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Record identity.
    pub id: RecordId,
    /// Name column.
    pub name: Cell,
    /// Email column.
    pub email: Cell,
    /// Role column. Never editable.
    pub role: String,
    /// Whether the row is in the selection set.
    pub selected: bool,
    /// True when this row is the edit target; its name and email are inputs.
    pub editing: bool,
}

/// Content of an editable column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Plain value.
    Text(String),
    /// Staged value of a row under edit.
    Input {
        /// Staged text and cursor.
        input: TextInput,
        /// Whether this input receives keystrokes.
        focused: bool,
    },
}

impl Cell {
    /// Text shown in the cell regardless of mode.
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Input { input, .. } => input.value(),
        }
    }
}

/// Page navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBar {
    /// Current 1-based page.
    pub current: usize,
    /// Buttons for pages `1..=total`; empty when nothing matches.
    pub buttons: Vec<PageButton>,
    /// Whether Prev leads anywhere.
    pub has_prev: bool,
    /// Whether Next leads anywhere.
    pub has_next: bool,
}

/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// 1-based page number.
    pub number: usize,
    /// Whether this is the current page.
    pub current: bool,
}

impl PageBar {
    /// Number of pages.
    pub fn total(&self) -> usize {
        self.buttons.len()
    }
}

/// Describe the engine state for rendering.
pub fn describe(state: &EngineState) -> DisplayModel {
    let draft = state.edit_mode().draft();
    let rows = state
        .visible()
        .into_iter()
        .map(|record| describe_row(record, state, draft))
        .collect();

    let total = state.total_pages();
    let current = state.page();
    let buttons = (1..=total)
        .map(|number| PageButton {
            number,
            current: number == current,
        })
        .collect();

    DisplayModel {
        query: state.query().to_string(),
        rows,
        pages: PageBar {
            current,
            buttons,
            has_prev: current > 1,
            has_next: current < total,
        },
        total_records: state.records().len(),
        total_matches: state.matching().len(),
        selected_count: state.selection().len(),
        bulk_delete_enabled: !state.selection().is_empty(),
    }
}

fn describe_row(record: &Record, state: &EngineState, draft: Option<&EditDraft>) -> DisplayRow {
    let draft = draft.filter(|d| d.id() == record.id());
    let cell = |field: EditableField, plain: &str| match draft {
        Some(d) => Cell::Input {
            input: d.input(field).clone(),
            focused: d.focused() == field,
        },
        None => Cell::Text(plain.to_string()),
    };

    DisplayRow {
        id: record.id().clone(),
        name: cell(EditableField::Name, record.name()),
        email: cell(EditableField::Email, record.email()),
        role: record.role().to_string(),
        selected: state.selection().is_selected(record.id()),
        editing: draft.is_some(),
    }
}
