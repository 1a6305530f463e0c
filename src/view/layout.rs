//! Screen layout rendering.
//!
//! Pure layout logic: search bar on top, member table, page bar and status
//! line at the bottom, help overlay above everything.

use super::constants::{PAGE_BAR_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::help::render_help_overlay;
use super::pagination::page_bar_line;
use super::search_input::SearchInput;
use super::styles::TableStyles;
use super::table::{render_table, TableContext};
use crate::state::{AppState, DisplayModel, FocusPane};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Search bar.
    pub search: Rect,
    /// Member table.
    pub table: Rect,
    /// Page bar.
    pub pages: Rect,
    /// Status line.
    pub status: Rect,
}

/// Split the frame into its regions.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGE_BAR_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        search: chunks[0],
        table: chunks[1],
        pages: chunks[2],
        status: chunks[3],
    }
}

/// Render one frame.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &TableStyles) {
    let display = state.display();
    let areas = calculate_areas(frame.area());

    frame.render_widget(
        SearchInput::new(state.search(), state.focus == FocusPane::Search, styles),
        areas.search,
    );

    render_table(
        frame,
        areas.table,
        &display,
        TableContext {
            cursor: state.cursor(),
            focused: state.focus == FocusPane::Table,
            loading: state.loading,
        },
        styles,
    );

    frame.render_widget(
        Paragraph::new(page_bar_line(&display.pages, styles)).alignment(Alignment::Center),
        areas.pages,
    );

    frame.render_widget(
        Paragraph::new(status_line(&display, state, styles)),
        areas.status,
    );

    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}

/// Status line: counts and bulk-delete hint on the left, mode hints after.
pub fn status_line(display: &DisplayModel, state: &AppState, styles: &TableStyles) -> Line<'static> {
    let mut spans = Vec::new();

    if state.loading {
        spans.push(Span::styled(" Loading members… ", styles.muted));
        return Line::from(spans);
    }

    spans.push(Span::raw(format!(
        " {} of {} members ",
        display.total_matches, display.total_records
    )));

    if display.bulk_delete_enabled {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            format!("{} selected · D delete selected ", display.selected_count),
            styles.danger,
        ));
    }

    spans.push(Span::raw("│ "));
    spans.push(Span::styled(mode_hints(state), styles.muted));

    Line::from(spans)
}

fn mode_hints(state: &AppState) -> String {
    if state.focus == FocusPane::Search {
        return "Enter keep query · Esc clear".to_string();
    }
    match state.engine().edit_mode().target() {
        Some(id) => format!("Editing {id}: Tab switch field · Enter save · Esc cancel"),
        None => "/ search · Space select · e edit · d delete · ? help · q quit".to_string(),
    }
}

/// Unstyled status line text, without the edge padding.
pub fn status_text(state: &AppState) -> String {
    let text: String = status_line(&state.display(), state, &TableStyles::default())
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect();
    text.trim().to_string()
}
