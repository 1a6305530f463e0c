//! Page navigation bar: `◀ Prev  1 2 [3]  Next ▶`.

use crate::state::PageBar;
use crate::view::styles::TableStyles;
use ratatui::text::{Line, Span};

const PREV_LABEL: &str = "◀ Prev";
const NEXT_LABEL: &str = "Next ▶";
const GAP: &str = "  ";

/// Styled page bar. Disabled Prev/Next are dimmed; the current page is
/// bracketed and highlighted.
pub fn page_bar_line(bar: &PageBar, styles: &TableStyles) -> Line<'static> {
    let edge = |label: &'static str, enabled: bool| {
        Span::styled(
            label,
            if enabled {
                styles.page_link
            } else {
                styles.disabled
            },
        )
    };

    let mut spans = vec![edge(PREV_LABEL, bar.has_prev), Span::raw(GAP)];
    for (i, button) in bar.buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if button.current {
            spans.push(Span::styled(
                format!("[{}]", button.number),
                styles.current_page,
            ));
        } else {
            spans.push(Span::styled(button.number.to_string(), styles.page_link));
        }
    }
    if !bar.buttons.is_empty() {
        spans.push(Span::raw(GAP));
    }
    spans.push(edge(NEXT_LABEL, bar.has_next));

    Line::from(spans)
}

/// Unstyled page bar text.
pub fn page_bar_text(bar: &PageBar) -> String {
    page_bar_line(bar, &TableStyles::default())
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}
