//! UI state machine (pure).
//!
//! The record view engine (filter, paginator, selection set, edit-mode
//! tracker) plus the presentation state around it. All state transitions
//! are pure functions testable without a terminal.

pub mod app_state;
pub mod display;
pub mod edit;
pub mod edit_input_handler;
pub mod engine;
pub mod filter;
pub mod paginate;
pub mod search_input_handler;
pub mod selection;
pub mod table_handler;
pub mod text_input;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use display::{describe, Cell, DisplayModel, DisplayRow, PageBar, PageButton};
pub use edit::{EditDraft, EditInput, EditMode};
pub use engine::{reduce, Action, EngineState};
pub use paginate::DEFAULT_PAGE_SIZE;
pub use selection::SelectionSet;
pub use table_handler::handle_table_action;
pub use text_input::TextInput;
