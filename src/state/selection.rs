//! Selection set of record ids marked for bulk action.

use crate::model::RecordId;
use std::collections::HashSet;

/// Set of selected record ids.
///
/// Value type: operations consume the set and return the new one. The
/// engine keeps it a subset of the ids present in the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<RecordId>,
}

impl SelectionSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. No other id is affected.
    pub fn toggle(mut self, id: &RecordId) -> Self {
        if !self.ids.remove(id) {
            self.ids.insert(id.clone());
        }
        self
    }

    /// Add `id` (no-op if already selected).
    pub fn insert(mut self, id: &RecordId) -> Self {
        self.ids.insert(id.clone());
        self
    }

    /// Remove `id` (no-op if not selected).
    pub fn remove(mut self, id: &RecordId) -> Self {
        self.ids.remove(id);
        self
    }

    /// Deselect everything.
    pub fn clear(self) -> Self {
        Self::default()
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }
}
