use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, default_style, filter_active_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search and filter bar
pub fn render_filter_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = Vec::new();

    let search_label = if app.ui_mode == UiMode::Searching {
        Span::styled(
            format!("search: {}▏", app.filter.search_term),
            filter_active_style(),
        )
    } else if app.filter.search_term.is_empty() {
        Span::styled("search: (none)".to_string(), hint_style())
    } else {
        Span::styled(
            format!("search: {}", app.filter.search_term),
            filter_active_style(),
        )
    };
    spans.push(search_label);

    spans.push(Span::raw("   "));
    spans.push(facet_span("priority", app.filter.priority.label()));
    spans.push(Span::raw("   "));
    spans.push(facet_span("status", app.filter.completed.label()));

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Filter ", title_style())),
    );

    f.render_widget(paragraph, area);
}

fn facet_span(name: &str, value: &str) -> Span<'static> {
    let text = format!("{}: {}", name, value);
    if value == "all" {
        Span::styled(text, default_style())
    } else {
        Span::styled(text, filter_active_style())
    }
}
