use crate::app::AppState;
use crate::domain::{format_due_date, format_time, Priority, Project, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, due_date_style, high_priority_style,
    low_priority_style, medium_priority_style, project_style, selected_style, title_style,
    tracking_style, tree_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Tree connector for task rows
fn tree_connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}

fn priority_style(priority: Priority) -> ratatui::style::Style {
    match priority {
        Priority::High => high_priority_style(),
        Priority::Medium => medium_priority_style(),
        Priority::Low => low_priority_style(),
    }
}

/// Render the projects/tasks list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = app.rows();
    let filtered = app.filtered();

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let line = match row.task_id {
                None => {
                    let project = filtered
                        .iter()
                        .find(|fp| fp.project.id == row.project_id)
                        .map(|fp| fp.project);
                    match project {
                        Some(p) => create_project_line(p, app.store.is_open(p.id)),
                        None => Line::from(""),
                    }
                }
                Some(task_id) => match app.store.task(row.project_id, task_id) {
                    Some(task) => create_task_line(task, row.is_last),
                    None => Line::from(""),
                },
            };

            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Projects ", title_style())),
    );

    f.render_widget(list, area);
}

/// Create a project header line: marker, name, done/total counts
fn create_project_line(project: &Project, is_open: bool) -> Line<'static> {
    let marker = if is_open { "▾" } else { "▸" };
    let counts = format!(
        " ({}/{})",
        project.completed_count(),
        project.tasks.len()
    );

    Line::from(vec![
        Span::styled(format!("{} ", marker), project_style()),
        Span::styled(project.name.clone(), project_style()),
        Span::styled(counts, tree_style()),
    ])
}

/// Create a task line: connector, checkbox, text, priority badge,
/// due date, and stopwatch readout
fn create_task_line(task: &Task, is_last: bool) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        format!("  {} ", tree_connector(is_last)),
        tree_style(),
    ));

    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    spans.push(Span::raw(format!("{} ", checkbox)));

    if task.completed {
        spans.push(Span::styled(task.text.clone(), done_style()));
    } else {
        spans.push(Span::raw(task.text.clone()));
    }

    spans.push(Span::styled(
        format!("  [{}]", task.priority.label()),
        priority_style(task.priority),
    ));

    if task.due_date.is_some() {
        spans.push(Span::styled(
            format!("  due {}", format_due_date(task.due_date)),
            due_date_style(),
        ));
    }

    if task.is_tracking() {
        spans.push(Span::styled(
            format!("  ⏱ {}", format_time(task.time_spent)),
            tracking_style(),
        ));
    } else if task.time_spent > 0.0 {
        spans.push(Span::styled(
            format!("  {}", format_time(task.time_spent)),
            tree_style(),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_line_contains_text_and_badge() {
        let mut task = Task::new(1, "Write proposal".to_string());
        task.priority = Priority::High;
        let line = create_task_line(&task, false);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Write proposal"));
        assert!(line_str.contains("[high]"));
    }

    #[test]
    fn test_create_project_line_shows_counts() {
        let mut project = Project::new(1, "Errands".to_string());
        project.tasks.push(Task::new(2, "a".to_string()));
        project.tasks[0].completed = true;
        let line = create_project_line(&project, true);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Errands"));
        assert!(line_str.contains("(1/1)"));
    }

    #[test]
    fn test_tree_connector() {
        assert_eq!(tree_connector(false), "├─");
        assert_eq!(tree_connector(true), "└─");
    }
}
