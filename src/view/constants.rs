//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values.

/// Height of the search input widget in lines (border + content).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the page navigation bar in lines.
pub const PAGE_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for counts, the bulk-delete hint and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width of the selection checkbox column (`[x]`).
pub const CHECKBOX_COLUMN_WIDTH: u16 = 3;

/// Width of the id column.
pub const ID_COLUMN_WIDTH: u16 = 6;

/// Width of the role column.
pub const ROLE_COLUMN_WIDTH: u16 = 10;

/// Width of the actions column.
pub const ACTIONS_COLUMN_WIDTH: u16 = 16;
