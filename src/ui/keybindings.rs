use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Enter track/fold   "),
        Span::raw("Space done   "),
        Span::raw("a task   "),
        Span::raw("A project   "),
        Span::raw("e edit   "),
        Span::raw("x delete   "),
        Span::raw("p priority   "),
        Span::raw("u due   "),
        Span::raw("s stop   "),
        Span::raw("/ search   "),
        Span::raw("f/c filters   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
