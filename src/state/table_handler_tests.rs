//! Tests for table action handler.

use super::*;
use crate::model::{Record, RecordId};
use std::num::NonZeroUsize;

fn member(n: usize) -> Record {
    Record::from_columns(
        RecordId::new(n.to_string()).unwrap(),
        format!("Member {n}"),
        format!("member{n}@example.com"),
        "member",
    )
}

fn state(count: usize, page_size: usize) -> AppState {
    AppState::with_records(
        (1..=count).map(member).collect(),
        NonZeroUsize::new(page_size).unwrap(),
    )
}

fn id(raw: &str) -> RecordId {
    RecordId::new(raw).unwrap()
}

fn visible_ids(state: &AppState) -> Vec<String> {
    state
        .engine()
        .visible()
        .iter()
        .map(|r| r.id().to_string())
        .collect()
}

// ===== Navigation =====

#[test]
fn cursor_actions_move_highlight() {
    let mut state = state(3, 3);
    handle_table_action(&mut state, KeyAction::CursorDown);
    handle_table_action(&mut state, KeyAction::CursorDown);
    assert_eq!(state.highlighted_id(), Some(id("3")));

    handle_table_action(&mut state, KeyAction::CursorUp);
    assert_eq!(state.highlighted_id(), Some(id("2")));
}

#[test]
fn page_actions_walk_pages() {
    let mut state = state(7, 2);

    handle_table_action(&mut state, KeyAction::NextPage);
    assert_eq!(visible_ids(&state), vec!["3", "4"]);

    handle_table_action(&mut state, KeyAction::LastPage);
    assert_eq!(visible_ids(&state), vec!["7"]);

    handle_table_action(&mut state, KeyAction::NextPage);
    assert_eq!(state.engine().page(), 4);

    handle_table_action(&mut state, KeyAction::PrevPage);
    assert_eq!(state.engine().page(), 3);

    handle_table_action(&mut state, KeyAction::FirstPage);
    assert_eq!(state.engine().page(), 1);
}

#[test]
fn go_to_page_out_of_range_is_ignored() {
    let mut state = state(4, 2);
    handle_table_action(&mut state, KeyAction::GoToPage(2));
    assert_eq!(state.engine().page(), 2);

    handle_table_action(&mut state, KeyAction::GoToPage(9));
    assert_eq!(state.engine().page(), 2);
}

// ===== Selection =====

#[test]
fn toggle_select_uses_highlighted_row() {
    let mut state = state(3, 3);
    handle_table_action(&mut state, KeyAction::CursorDown);
    handle_table_action(&mut state, KeyAction::ToggleSelect);

    assert!(state.engine().selection().is_selected(&id("2")));
    assert_eq!(state.engine().selection().len(), 1);

    handle_table_action(&mut state, KeyAction::ToggleSelect);
    assert!(state.engine().selection().is_empty());
}

#[test]
fn toggle_select_page_then_clear() {
    let mut state = state(5, 2);
    handle_table_action(&mut state, KeyAction::ToggleSelectPage);
    assert_eq!(state.engine().selection().len(), 2);

    handle_table_action(&mut state, KeyAction::ClearSelection);
    assert!(state.engine().selection().is_empty());
}

#[test]
fn selection_on_empty_page_is_noop() {
    let mut state = state(3, 3);
    state.dispatch(Action::SetQuery("nobody".to_string()));

    handle_table_action(&mut state, KeyAction::ToggleSelect);
    handle_table_action(&mut state, KeyAction::BeginEdit);
    handle_table_action(&mut state, KeyAction::DeleteRow);

    assert!(state.engine().selection().is_empty());
    assert!(!state.is_editing());
    assert_eq!(state.engine().records().len(), 3);
}

// ===== Edit / delete =====

#[test]
fn begin_edit_targets_highlighted_row() {
    let mut state = state(3, 3);
    handle_table_action(&mut state, KeyAction::CursorDown);
    handle_table_action(&mut state, KeyAction::BeginEdit);

    assert_eq!(state.engine().edit_mode().target(), Some(&id("2")));
}

#[test]
fn delete_row_removes_highlighted_record() {
    let mut state = state(3, 3);
    handle_table_action(&mut state, KeyAction::CursorDown);
    handle_table_action(&mut state, KeyAction::DeleteRow);

    assert_eq!(visible_ids(&state), vec!["1", "3"]);
    assert_eq!(state.highlighted_id(), Some(id("3")));
}

#[test]
fn delete_selected_removes_all_selected() {
    let mut state = state(4, 4);
    handle_table_action(&mut state, KeyAction::ToggleSelect);
    handle_table_action(&mut state, KeyAction::CursorDown);
    handle_table_action(&mut state, KeyAction::CursorDown);
    handle_table_action(&mut state, KeyAction::ToggleSelect);

    handle_table_action(&mut state, KeyAction::DeleteSelected);

    assert_eq!(visible_ids(&state), vec!["2", "4"]);
    assert!(state.engine().selection().is_empty());
}

#[test]
fn routed_actions_are_ignored() {
    let mut state = state(3, 3);
    let before = state.engine().clone();

    handle_table_action(&mut state, KeyAction::Quit);
    handle_table_action(&mut state, KeyAction::Help);
    handle_table_action(&mut state, KeyAction::StartSearch);

    assert_eq!(state.engine(), &before);
    assert!(!state.help_visible);
}
