//! Member table widget.
//!
//! Draws the visible page from a [`DisplayModel`]: checkbox, id, name,
//! email, role and the row actions. The row under edit shows its staged
//! name and email as inputs.

use super::constants::{
    ACTIONS_COLUMN_WIDTH, CHECKBOX_COLUMN_WIDTH, ID_COLUMN_WIDTH, ROLE_COLUMN_WIDTH,
};
use super::search_input::input_line;
use super::styles::TableStyles;
use crate::state::{Cell as DisplayCell, DisplayModel, DisplayRow};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_SPACING: u16 = 1;
const COLUMN_COUNT: u16 = 6;
const ELLIPSIS: char = '…';

/// Table-level flags the display model does not carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableContext {
    /// Highlighted row index within the page.
    pub cursor: usize,
    /// Whether the table receives key input.
    pub focused: bool,
    /// Whether the loader is still running.
    pub loading: bool,
}

/// Render the member table into `area`.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    display: &DisplayModel,
    ctx: TableContext,
    styles: &TableStyles,
) {
    let title = format!(
        " Members ({}/{}) ",
        display.total_matches, display.total_records
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if ctx.focused {
            styles.focused_border
        } else {
            Style::default()
        });

    if display.rows.is_empty() {
        let message = empty_message(display, ctx.loading);
        frame.render_widget(
            Paragraph::new(Line::styled(message, styles.muted)).block(block),
            area,
        );
        return;
    }

    let (name_width, email_width) = flexible_widths(area.width);

    let header = Row::new(["", "ID", "Name", "Email", "Role", "Actions"]).style(styles.header);
    let rows = display
        .rows
        .iter()
        .map(|row| table_row(row, name_width, email_width, styles));

    let widths = [
        Constraint::Length(CHECKBOX_COLUMN_WIDTH),
        Constraint::Length(ID_COLUMN_WIDTH),
        Constraint::Length(name_width),
        Constraint::Length(email_width),
        Constraint::Length(ROLE_COLUMN_WIDTH),
        Constraint::Length(ACTIONS_COLUMN_WIDTH),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(styles.highlighted_row);

    let mut state = TableState::default();
    if ctx.focused {
        state.select(Some(ctx.cursor.min(display.rows.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn empty_message(display: &DisplayModel, loading: bool) -> String {
    if loading {
        "Loading members…".to_string()
    } else if display.total_records == 0 {
        "No members".to_string()
    } else {
        format!("No members match \"{}\"", display.query)
    }
}

/// Split the space left by the fixed columns between name (40%) and email.
fn flexible_widths(total_width: u16) -> (u16, u16) {
    let fixed = CHECKBOX_COLUMN_WIDTH + ID_COLUMN_WIDTH + ROLE_COLUMN_WIDTH + ACTIONS_COLUMN_WIDTH;
    let spacing = COLUMN_SPACING * (COLUMN_COUNT - 1);
    let borders = 2;
    let flexible = total_width.saturating_sub(fixed + spacing + borders);
    let name = flexible * 2 / 5;
    (name, flexible - name)
}

fn table_row<'a>(
    row: &'a DisplayRow,
    name_width: u16,
    email_width: u16,
    styles: &TableStyles,
) -> Row<'a> {
    let checkbox = if row.selected { "[x]" } else { "[ ]" };
    let actions = if row.editing {
        "⏎ save  ⎋ cancel"
    } else {
        "e edit  d del"
    };

    let style = if row.editing {
        styles.editing_row
    } else if row.selected {
        styles.selected_row
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(checkbox),
        Cell::from(truncate(row.id.as_str(), usize::from(ID_COLUMN_WIDTH))),
        editable_cell(&row.name, name_width, styles),
        editable_cell(&row.email, email_width, styles),
        Cell::from(truncate(&row.role, usize::from(ROLE_COLUMN_WIDTH))),
        Cell::from(actions),
    ])
    .style(style)
}

fn editable_cell(cell: &DisplayCell, width: u16, styles: &TableStyles) -> Cell<'static> {
    match cell {
        DisplayCell::Text(text) => Cell::from(truncate(text, usize::from(width))),
        DisplayCell::Input { input, focused } => {
            if *focused {
                Cell::from(input_line(input, styles.cursor, styles.focused_input))
            } else {
                Cell::from(Line::styled(input.value().to_string(), styles.input))
            }
        }
    }
}

/// Truncate `text` to `max_width` terminal columns, ending with `…` when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}
