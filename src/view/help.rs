//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::TableStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: category title, then (keys, description) pairs.
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Rows",
        &[
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
        ],
    ),
    (
        "Pages",
        &[
            ("h/←/PgUp", "Previous page"),
            ("l/→/PgDn", "Next page"),
            ("g/Home", "First page"),
            ("G/End", "Last page"),
            ("1-9", "Go to page"),
        ],
    ),
    (
        "Selection",
        &[
            ("Space", "Select / deselect row"),
            ("a", "Select / deselect page"),
            ("x", "Clear selection"),
        ],
    ),
    (
        "Edit & Delete",
        &[
            ("e/Enter", "Edit name and email"),
            ("Tab", "Switch field while editing"),
            ("Enter", "Save edit"),
            ("Esc", "Cancel edit"),
            ("Other keys", "Typed into the draft until Enter/Esc"),
            ("d/Delete", "Delete row"),
            ("D", "Delete selected rows"),
        ],
    ),
    (
        "Search",
        &[
            ("/ or Ctrl+f", "Search name, email, role"),
            ("Enter", "Keep query, back to table"),
            ("Esc", "Clear query, back to table"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+C", "Quit")],
    ),
];

const KEY_COLUMN_WIDTH: usize = 14;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &TableStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &TableStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (category, entries)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*category, styles.section_header)));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:<width$}", width = KEY_COLUMN_WIDTH),
                    styles.key,
                ),
                Span::styled(*description, Style::default()),
            ]));
        }
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
