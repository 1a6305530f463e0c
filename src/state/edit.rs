//! Edit-mode tracker.
//!
//! Sum type with two states:
//! - Idle: no record under edit
//! - Editing: exactly one record, with staged values for the editable fields
//!
//! Transitions are pure functions. Committing a saved draft into the
//! collection is left to the engine, which receives an [`EditCommit`].

use super::text_input::TextInput;
use crate::model::{EditableField, Record, RecordId};

/// Edit-mode state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    /// No edit target.
    #[default]
    Idle,
    /// One record is being edited.
    Editing(EditDraft),
}

impl EditMode {
    /// Id of the record under edit, if any.
    pub fn target(&self) -> Option<&RecordId> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing(draft) => Some(&draft.id),
        }
    }

    /// Whether `id` is the record under edit.
    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.target() == Some(id)
    }

    /// The draft, while editing.
    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing(draft) => Some(draft),
        }
    }
}

/// Staged values for the record under edit.
///
/// Each input remembers the value it was seeded with, so a save only
/// writes back fields the operator actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    id: RecordId,
    name: TextInput,
    email: TextInput,
    seed_name: String,
    seed_email: String,
    focused: EditableField,
}

impl EditDraft {
    /// Draft seeded from the record's current values, focus on the name.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id().clone(),
            name: TextInput::with_value(record.name()),
            email: TextInput::with_value(record.email()),
            seed_name: record.name().to_string(),
            seed_email: record.email().to_string(),
            focused: EditableField::Name,
        }
    }

    /// Id of the record this draft belongs to.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Field receiving keystrokes.
    pub fn focused(&self) -> EditableField {
        self.focused
    }

    /// Whether `field` differs from the value it was seeded with.
    pub fn is_changed(&self, field: EditableField) -> bool {
        self.input(field).value() != self.seed(field)
    }

    fn seed(&self, field: EditableField) -> &str {
        match field {
            EditableField::Name => &self.seed_name,
            EditableField::Email => &self.seed_email,
        }
    }

    /// Staged input for `field`.
    pub fn input(&self, field: EditableField) -> &TextInput {
        match field {
            EditableField::Name => &self.name,
            EditableField::Email => &self.email,
        }
    }

    fn input_mut(&mut self, field: EditableField) -> &mut TextInput {
        match field {
            EditableField::Name => &mut self.name,
            EditableField::Email => &mut self.email,
        }
    }

    /// Apply an edit to the focused field (or move focus).
    pub fn apply(mut self, input: EditInput) -> Self {
        let field = self.focused;
        if input == EditInput::NextField {
            self.focused = field.next();
            return self;
        }

        let slot = self.input_mut(field);
        let current = std::mem::take(slot);
        *slot = match input {
            EditInput::Char(ch) => current.insert(ch),
            EditInput::Backspace => current.backspace(),
            EditInput::Left => current.left(),
            EditInput::Right => current.right(),
            EditInput::NextField => current,
        };
        self
    }

    /// Commit holding only the fields whose staged value changed.
    fn into_commit(self) -> EditCommit {
        let values = EditableField::ALL
            .into_iter()
            .filter(|field| self.is_changed(*field))
            .map(|field| (field, self.input(field).value().to_string()))
            .collect();
        EditCommit {
            id: self.id,
            values,
        }
    }
}

/// Keystroke-level change to a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditInput {
    /// Insert a character at the cursor.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Move input focus to the next editable field.
    NextField,
}

/// Values to write into the collection when a draft is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommit {
    /// Record to update.
    pub id: RecordId,
    /// Changed fields with their new values. Untouched fields are absent.
    pub values: Vec<(EditableField, String)>,
}

impl EditCommit {
    /// Write the staged values into `record`.
    pub fn apply_to(&self, record: &mut Record) {
        for (field, value) in &self.values {
            record.set_text_field(field.key(), value.clone());
        }
    }
}

/// `Idle|Editing(_) --begin_edit(id)--> Editing(id)`.
///
/// Requires `id` to be present in `records`; otherwise the mode is
/// returned unchanged. Any existing draft is abandoned.
pub fn begin_edit(mode: EditMode, records: &[Record], id: &RecordId) -> EditMode {
    match records.iter().find(|r| r.id() == id) {
        Some(record) => EditMode::Editing(EditDraft::from_record(record)),
        None => mode,
    }
}

/// `Editing(id) --save(id)--> Idle`, yielding the values to commit.
///
/// Saving any other id (or while idle) is a no-op.
pub fn save(mode: EditMode, id: &RecordId) -> (EditMode, Option<EditCommit>) {
    match mode {
        EditMode::Editing(draft) if draft.id == *id => (EditMode::Idle, Some(draft.into_commit())),
        other => (other, None),
    }
}

/// `Editing(_) --cancel--> Idle`, discarding the draft.
pub fn cancel(_mode: EditMode) -> EditMode {
    EditMode::Idle
}

/// Feed a keystroke to the draft. No-op while idle.
pub fn apply_input(mode: EditMode, input: EditInput) -> EditMode {
    match mode {
        EditMode::Editing(draft) => EditMode::Editing(draft.apply(input)),
        EditMode::Idle => EditMode::Idle,
    }
}

/// React to records leaving the collection.
///
/// Clears the edit target when `removed` reports it gone; otherwise the
/// mode is unchanged.
pub fn on_removed(mode: EditMode, mut removed: impl FnMut(&RecordId) -> bool) -> EditMode {
    match mode {
        EditMode::Editing(draft) if removed(&draft.id) => EditMode::Idle,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> RecordId {
        RecordId::new(raw).unwrap()
    }

    fn records() -> Vec<Record> {
        vec![
            Record::from_columns(id("1"), "Ann", "ann@example.com", "admin"),
            Record::from_columns(id("2"), "Bob", "bob@example.com", "member"),
        ]
    }

    #[test]
    fn begin_edit_enters_editing_with_seeded_draft() {
        let mode = begin_edit(EditMode::Idle, &records(), &id("2"));
        let draft = mode.draft().expect("should be editing");
        assert_eq!(draft.id(), &id("2"));
        assert_eq!(draft.input(EditableField::Name).value(), "Bob");
        assert_eq!(draft.input(EditableField::Email).value(), "bob@example.com");
        assert_eq!(draft.focused(), EditableField::Name);
    }

    #[test]
    fn begin_edit_unknown_id_keeps_mode() {
        let mode = begin_edit(EditMode::Idle, &records(), &id("99"));
        assert_eq!(mode, EditMode::Idle);

        let editing = begin_edit(EditMode::Idle, &records(), &id("1"));
        let still = begin_edit(editing.clone(), &records(), &id("99"));
        assert_eq!(still, editing);
    }

    #[test]
    fn begin_edit_on_other_row_abandons_draft() {
        let mode = begin_edit(EditMode::Idle, &records(), &id("1"));
        let mode = apply_input(mode, EditInput::Char('x'));
        let mode = begin_edit(mode, &records(), &id("2"));
        assert!(mode.is_editing(&id("2")));

        // Returning to row 1 starts fresh from the record, not the old draft
        let mode = begin_edit(mode, &records(), &id("1"));
        assert_eq!(mode.draft().unwrap().input(EditableField::Name).value(), "Ann");
    }

    #[test]
    fn save_matching_id_yields_commit_and_idle() {
        let mode = begin_edit(EditMode::Idle, &records(), &id("1"));
        let mode = apply_input(mode, EditInput::Char('e'));
        let (mode, commit) = save(mode, &id("1"));
        assert_eq!(mode, EditMode::Idle);
        let commit = commit.expect("commit expected");
        assert_eq!(commit.id, id("1"));
        assert_eq!(commit.values, vec![(EditableField::Name, "Anne".to_string())]);
    }

    #[test]
    fn save_without_changes_commits_nothing() {
        let mode = begin_edit(EditMode::Idle, &records(), &id("1"));
        // Type and erase: value ends where it started
        let mode = apply_input(mode, EditInput::Char('x'));
        let mode = apply_input(mode, EditInput::Backspace);
        assert!(!mode.draft().unwrap().is_changed(EditableField::Name));

        let (_, commit) = save(mode, &id("1"));
        assert!(commit.expect("commit expected").values.is_empty());
    }

    #[test]
    fn save_other_id_is_noop() {
        let mode = begin_edit(EditMode::Idle, &records(), &id("1"));
        let (after, commit) = save(mode.clone(), &id("2"));
        assert_eq!(after, mode);
        assert!(commit.is_none());

        let (after, commit) = save(EditMode::Idle, &id("1"));
        assert_eq!(after, EditMode::Idle);
        assert!(commit.is_none());
    }

    #[test]
    fn next_field_moves_focus_and_typing_follows() {
        let mode = begin_edit(EditMode::Idle, &records(), &id("2"));
        let mode = apply_input(mode, EditInput::NextField);
        let mode = apply_input(mode, EditInput::Backspace);
        let draft = mode.draft().unwrap();
        assert_eq!(draft.focused(), EditableField::Email);
        assert_eq!(draft.input(EditableField::Email).value(), "bob@example.co");
        assert_eq!(draft.input(EditableField::Name).value(), "Bob");
    }

    #[test]
    fn cancel_discards_draft() {
        let mode = begin_edit(EditMode::Idle, &records(), &id("1"));
        assert_eq!(cancel(mode), EditMode::Idle);
    }

    #[test]
    fn input_while_idle_is_ignored() {
        assert_eq!(apply_input(EditMode::Idle, EditInput::Char('a')), EditMode::Idle);
    }

    #[test]
    fn on_removed_only_clears_matching_target() {
        let mode = begin_edit(EditMode::Idle, &records(), &id("1"));
        let kept = on_removed(mode.clone(), |i| i == &id("2"));
        assert!(kept.is_editing(&id("1")));

        let cleared = on_removed(mode, |i| i == &id("1"));
        assert_eq!(cleared, EditMode::Idle);
    }

    #[test]
    fn commit_writes_values_into_record() {
        let mut record = records().remove(0);
        let commit = EditCommit {
            id: id("1"),
            values: vec![
                (EditableField::Name, "Annie".to_string()),
                (EditableField::Email, "annie@example.com".to_string()),
            ],
        };
        commit.apply_to(&mut record);
        assert_eq!(record.name(), "Annie");
        assert_eq!(record.email(), "annie@example.com");
        assert_eq!(record.role(), "admin");
    }
}
