//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the highlighted row up. Default: k/↑
    CursorUp,
    /// Move the highlighted row down. Default: j/↓
    CursorDown,

    // Pages
    /// Previous page. Default: h/←/Page Up
    PrevPage,
    /// Next page. Default: l/→/Page Down
    NextPage,
    /// First page. Default: g/Home
    FirstPage,
    /// Last page. Default: G/End
    LastPage,
    /// Jump to a page by number. Field: 1-based page (1-9)
    GoToPage(usize),

    // Selection
    /// Toggle the highlighted row in the selection set. Default: Space
    ToggleSelect,
    /// Select or deselect every row on the current page. Default: a
    ToggleSelectPage,
    /// Empty the selection set. Default: x
    ClearSelection,

    // Editing
    /// Start editing the highlighted row. Default: e/Enter
    BeginEdit,

    // Deletion
    /// Delete the highlighted row. Default: d/Delete
    DeleteRow,
    /// Delete every selected row. Default: D
    DeleteSelected,

    // Search
    /// Focus the search input. Default: //Ctrl+f
    StartSearch,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Toggle the help overlay. Default: ?
    Help,
}

impl KeyAction {
    /// Whether the action changes records or selection.
    ///
    /// The help overlay blocks these while it is open.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            KeyAction::ToggleSelect
                | KeyAction::ToggleSelectPage
                | KeyAction::ClearSelection
                | KeyAction::BeginEdit
                | KeyAction::DeleteRow
                | KeyAction::DeleteSelected
        )
    }
}
