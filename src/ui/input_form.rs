use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title for the open input line
fn input_title(mode: UiMode) -> &'static str {
    match mode {
        UiMode::AddingProject => " New project ",
        UiMode::AddingTask => " New task ",
        UiMode::EditingProjectName => " Rename project ",
        UiMode::EditingTaskText => " Edit task ",
        UiMode::EditingDueDate => " Due date (YYYY-MM-DD, empty clears) ",
        UiMode::Searching | UiMode::Normal => "",
    }
}

/// Buffer contents for the open input line
fn input_text(app: &AppState) -> String {
    match app.ui_mode {
        UiMode::AddingProject => app.new_project_input.clone(),
        UiMode::AddingTask => app.new_task_input.clone(),
        UiMode::EditingDueDate => app.due_date_input.clone(),
        UiMode::EditingProjectName => app
            .session
            .project
            .as_ref()
            .map(|e| e.name.clone())
            .unwrap_or_default(),
        UiMode::EditingTaskText => app
            .session
            .task
            .as_ref()
            .map(|e| e.text.clone())
            .unwrap_or_default(),
        UiMode::Searching | UiMode::Normal => String::new(),
    }
}

/// Render the bottom input line for the current mode
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(format!("{}▏", input_text(app)))
        .style(default_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(input_title(app.ui_mode), title_style())),
        );

    f.render_widget(paragraph, area);
}
