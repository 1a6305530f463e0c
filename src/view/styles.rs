//! Table styling configuration.
//!
//! Styles for the member table, page bar and status line, with a
//! monochrome variant when colors are disabled.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit configuration, independent of the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== TableStyles =====

/// Styles used when drawing a frame.
///
/// Without colors only modifiers (bold, reversed, underline) remain so
/// selection and focus stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyles {
    /// Column headers.
    pub header: Style,
    /// Row under the cursor.
    pub highlighted_row: Style,
    /// Rows in the selection set.
    pub selected_row: Style,
    /// Row under edit.
    pub editing_row: Style,
    /// Input cell of the draft that receives keystrokes.
    pub focused_input: Style,
    /// Input cell of the draft that does not.
    pub input: Style,
    /// Text cursor inside an input.
    pub cursor: Style,
    /// Current page button.
    pub current_page: Style,
    /// Other page buttons and enabled Prev/Next.
    pub page_link: Style,
    /// Prev/Next with nowhere to go.
    pub disabled: Style,
    /// Hints and empty-state text.
    pub muted: Style,
    /// Bulk delete hint.
    pub danger: Style,
    /// Help overlay section titles.
    pub section_header: Style,
    /// Key names in the help overlay.
    pub key: Style,
    /// Border of the pane with focus.
    pub focused_border: Style,
}

impl TableStyles {
    /// Styles for `config`; monochrome when colors are off.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                highlighted_row: Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                selected_row: Style::default().fg(Color::Cyan),
                editing_row: Style::default().fg(Color::Green),
                focused_input: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::UNDERLINED),
                input: Style::default().add_modifier(Modifier::UNDERLINED),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                current_page: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                page_link: Style::default().fg(Color::Cyan),
                disabled: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                muted: Style::default().fg(Color::DarkGray),
                danger: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                section_header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Cyan),
            }
        } else {
            let plain = Style::default();
            let bold = plain.add_modifier(Modifier::BOLD);
            Self {
                header: bold,
                highlighted_row: plain.add_modifier(Modifier::REVERSED),
                selected_row: bold,
                editing_row: plain,
                focused_input: plain.add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
                input: plain.add_modifier(Modifier::UNDERLINED),
                cursor: plain.add_modifier(Modifier::REVERSED),
                current_page: plain.add_modifier(Modifier::REVERSED),
                page_link: plain,
                disabled: plain.add_modifier(Modifier::DIM),
                muted: plain,
                danger: bold,
                section_header: bold,
                key: bold,
                focused_border: bold,
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
