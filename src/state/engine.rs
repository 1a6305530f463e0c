//! Record view engine.
//!
//! `EngineState` owns the record collection and all state that decides
//! what the operator sees: query, page, selection and edit mode. Every
//! user action is one [`Action`] applied by [`reduce`], which consumes the
//! old state and returns the new one. Derived views (matching records,
//! visible page, page count) are computed on demand.
//!
//! # Invariants
//!
//! - The selection only holds ids present in the collection.
//! - The edit target, if any, is present in the collection.
//! - The collection is installed once and afterwards only shrinks.
//! - Navigation keeps the page in `1..=max(total_pages, 1)`. The paginator
//!   itself does not clamp; see [`super::paginate`].

use super::edit::{self, EditInput, EditMode};
use super::filter;
use super::paginate::{self, DEFAULT_PAGE_SIZE};
use super::selection::SelectionSet;
use crate::model::{Record, RecordId};
use std::collections::HashSet;
use std::num::NonZeroUsize;
use tracing::{debug, warn};

/// One user-level transition of the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Install the records produced by the loader. Accepted once; duplicate
    /// ids keep their first occurrence.
    Loaded(Vec<Record>),
    /// Replace the search query. Resets to page 1.
    SetQuery(String),
    /// Jump to a 1-based page. Ignored when out of range.
    GoToPage(usize),
    /// Go back one page.
    PrevPage,
    /// Go forward one page.
    NextPage,
    /// Go to page 1.
    FirstPage,
    /// Go to the last page.
    LastPage,
    /// Flip one record's membership in the selection.
    ToggleSelect(RecordId),
    /// Select every visible row, or deselect them if all are selected.
    ToggleSelectPage,
    /// Deselect everything.
    ClearSelection,
    /// Start editing a record, abandoning any other draft.
    BeginEdit(RecordId),
    /// Keystroke for the draft under edit.
    EditInput(EditInput),
    /// Commit the draft of this record and leave edit mode.
    Save(RecordId),
    /// Leave edit mode without committing.
    CancelEdit,
    /// Remove one record.
    Delete(RecordId),
    /// Remove every selected record.
    DeleteSelected,
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Loaded(_) => "loaded",
            Action::SetQuery(_) => "set_query",
            Action::GoToPage(_) => "go_to_page",
            Action::PrevPage => "prev_page",
            Action::NextPage => "next_page",
            Action::FirstPage => "first_page",
            Action::LastPage => "last_page",
            Action::ToggleSelect(_) => "toggle_select",
            Action::ToggleSelectPage => "toggle_select_page",
            Action::ClearSelection => "clear_selection",
            Action::BeginEdit(_) => "begin_edit",
            Action::EditInput(_) => "edit_input",
            Action::Save(_) => "save",
            Action::CancelEdit => "cancel_edit",
            Action::Delete(_) => "delete",
            Action::DeleteSelected => "delete_selected",
        }
    }
}

/// Engine state. Pure data, no side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    records: Vec<Record>,
    loaded: bool,
    query: String,
    page: usize,
    page_size: NonZeroUsize,
    selection: SelectionSet,
    edit: EditMode,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl EngineState {
    /// Empty engine waiting for the loader.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            records: Vec::new(),
            loaded: false,
            query: String::new(),
            page: 1,
            page_size,
            selection: SelectionSet::new(),
            edit: EditMode::Idle,
        }
    }

    /// Engine with records already installed.
    ///
    /// Duplicate ids are dropped, keeping the first occurrence.
    pub fn with_records(records: Vec<Record>, page_size: NonZeroUsize) -> Self {
        reduce(Self::new(page_size), Action::Loaded(records))
    }

    /// Place the engine on `page` without range checks.
    ///
    /// Navigation actions never produce an out-of-range page; this exists
    /// so callers can restore a saved position and observe the unclamped
    /// paginator.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    // ===== Accessors =====

    /// The collection, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Whether the loader has reported.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Ids marked for bulk delete.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Edit-mode tracker.
    pub fn edit_mode(&self) -> &EditMode {
        &self.edit
    }

    /// Whether a record with `id` is in the collection.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    // ===== Derived views =====

    /// Records matching the current query, in collection order.
    pub fn matching(&self) -> Vec<&Record> {
        filter::filter(&self.records, &self.query)
    }

    /// Records on the current page.
    pub fn visible(&self) -> Vec<&Record> {
        let matching = self.matching();
        paginate::paginate(&matching, self.page, self.page_size).to_vec()
    }

    /// `ceil(matching / page_size)`, zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.matching().len(), self.page_size)
    }

    /// Highest page navigation may reach. Page 1 always exists, even empty.
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }
}

/// Apply one action and return the new state.
pub fn reduce(state: EngineState, action: Action) -> EngineState {
    debug!(action = action.name(), "Engine action");
    match action {
        Action::Loaded(records) => loaded(state, records),
        Action::SetQuery(query) => set_query(state, query),
        Action::GoToPage(page) => go_to_page(state, page),
        Action::PrevPage => {
            let target = state.page.saturating_sub(1);
            go_to_page(state, target)
        }
        Action::NextPage => {
            let target = state.page.saturating_add(1);
            go_to_page(state, target)
        }
        Action::FirstPage => go_to_page(state, 1),
        Action::LastPage => {
            let last = state.last_page();
            go_to_page(state, last)
        }
        Action::ToggleSelect(id) => toggle_select(state, &id),
        Action::ToggleSelectPage => toggle_select_page(state),
        Action::ClearSelection => EngineState {
            selection: state.selection.clear(),
            ..state
        },
        Action::BeginEdit(id) => {
            let edit = edit::begin_edit(state.edit, &state.records, &id);
            EngineState { edit, ..state }
        }
        Action::EditInput(input) => EngineState {
            edit: edit::apply_input(state.edit, input),
            ..state
        },
        Action::Save(id) => save(state, &id),
        Action::CancelEdit => EngineState {
            edit: edit::cancel(state.edit),
            ..state
        },
        Action::Delete(id) => delete(state, &id),
        Action::DeleteSelected => delete_selected(state),
    }
}

fn loaded(state: EngineState, records: Vec<Record>) -> EngineState {
    if state.loaded {
        warn!(
            ignored = records.len(),
            "Records already loaded; ignoring second load"
        );
        return state;
    }

    EngineState {
        records: dedup_ids(records),
        loaded: true,
        page: 1,
        selection: SelectionSet::new(),
        edit: EditMode::Idle,
        ..state
    }
}

/// Drop records whose id was already seen. The first occurrence wins.
fn dedup_ids(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id().clone());
            if !fresh {
                warn!(id = %record.id(), "Duplicate record id; keeping the first");
            }
            fresh
        })
        .collect()
}

fn set_query(state: EngineState, query: String) -> EngineState {
    EngineState {
        query,
        page: 1,
        ..state
    }
}

fn go_to_page(state: EngineState, page: usize) -> EngineState {
    if page < 1 || page > state.last_page() {
        return state;
    }
    EngineState { page, ..state }
}

fn toggle_select(state: EngineState, id: &RecordId) -> EngineState {
    if !state.contains(id) {
        return state;
    }
    EngineState {
        selection: state.selection.toggle(id),
        ..state
    }
}

fn toggle_select_page(state: EngineState) -> EngineState {
    let visible: Vec<RecordId> = state.visible().iter().map(|r| r.id().clone()).collect();
    if visible.is_empty() {
        return state;
    }

    let all_selected = visible.iter().all(|id| state.selection.is_selected(id));
    let selection = visible.iter().fold(state.selection, |set, id| {
        if all_selected {
            set.remove(id)
        } else {
            set.insert(id)
        }
    });

    EngineState { selection, ..state }
}

fn save(mut state: EngineState, id: &RecordId) -> EngineState {
    let (edit, commit) = edit::save(state.edit, id);
    state.edit = edit;

    if let Some(commit) = commit {
        if let Some(record) = state.records.iter_mut().find(|r| r.id() == &commit.id) {
            commit.apply_to(record);
        }
    }

    state
}

fn delete(mut state: EngineState, id: &RecordId) -> EngineState {
    let before = state.records.len();
    state.records.retain(|r| r.id() != id);
    if state.records.len() == before {
        return state;
    }

    state.selection = state.selection.remove(id);
    state.edit = edit::on_removed(state.edit, |target| target == id);
    clamp_page(state)
}

fn delete_selected(mut state: EngineState) -> EngineState {
    if state.selection.is_empty() {
        return state;
    }

    let selection = std::mem::take(&mut state.selection);
    state.records.retain(|r| !selection.is_selected(r.id()));
    state.edit = edit::on_removed(state.edit, |target| selection.is_selected(target));
    clamp_page(state)
}

/// Pull the page back into range after the match count shrank.
fn clamp_page(state: EngineState) -> EngineState {
    let last = state.last_page();
    if state.page > last {
        EngineState { page: last, ..state }
    } else {
        state
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
