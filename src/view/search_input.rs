//! Search input widget for rendering the search bar.

use crate::state::TextInput;
use crate::view::styles::TableStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
///
/// Always visible above the table. Shows a cursor while focused and a
/// placeholder while empty and unfocused.
pub struct SearchInput<'a> {
    input: &'a TextInput,
    focused: bool,
    styles: &'a TableStyles,
}

impl<'a> SearchInput<'a> {
    /// Widget over `input`; the placeholder shows when unfocused and empty.
    pub fn new(input: &'a TextInput, focused: bool, styles: &'a TableStyles) -> Self {
        Self {
            input,
            focused,
            styles,
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.focused {
            input_line(self.input, self.styles.cursor, Style::default())
        } else if self.input.value().is_empty() {
            Line::from(Span::styled(
                "Search by name, email or role (press /)",
                self.styles.muted,
            ))
        } else {
            Line::from(self.input.value().to_string())
        };

        let (title, border) = if self.focused {
            (" Search ", self.styles.focused_border)
        } else {
            (" Search ", Style::default())
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border),
            )
            .render(area, buf);
    }
}

/// Render a text input with a block cursor at its cursor position.
///
/// At the end of the value the cursor is drawn as a trailing space.
pub fn input_line(input: &TextInput, cursor_style: Style, text_style: Style) -> Line<'static> {
    let (before, at, after) = input.split_at_cursor();
    let cursor_text = at.map(String::from).unwrap_or_else(|| " ".to_string());

    Line::from(vec![
        Span::styled(before.to_string(), text_style),
        Span::styled(cursor_text, cursor_style),
        Span::styled(after.to_string(), text_style),
    ])
}
