use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a keyboard event. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        _ => handle_text_entry_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Stopwatch on a task row, expand/collapse on a project row
        KeyCode::Enter => match app.selected_row() {
            Some(row) if row.task_id.is_some() => app.toggle_selected_tracking(Local::now()),
            Some(_) => app.toggle_selected_project_open(),
            None => {}
        },
        KeyCode::Char('t') => app.toggle_selected_tracking(Local::now()),
        KeyCode::Char('s') => app.stop_selected_tracking(Local::now()),

        // Completion
        KeyCode::Char(' ') => app.toggle_selected_task(),

        // Creation and editing
        KeyCode::Char('a') => app.begin_add_task(),
        KeyCode::Char('A') => app.begin_add_project(),
        KeyCode::Char('e') => app.begin_edit_selected(),
        KeyCode::Char('x') => app.delete_selected(),

        // Task attributes
        KeyCode::Char('p') => app.cycle_selected_priority(),
        KeyCode::Char('u') => app.begin_due_date(),

        // Expand/collapse
        KeyCode::Tab | KeyCode::Char('o') => app.toggle_selected_project_open(),

        // Search and filters
        KeyCode::Char('/') => app.ui_mode = UiMode::Searching,
        KeyCode::Char('f') => app.cycle_priority_filter(),
        KeyCode::Char('c') => app.cycle_completion_filter(),
        KeyCode::Char('F') => app.clear_filters(),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while a text input is open. The primary activation key
/// commits only without a modifier: on the project input it adds the
/// project, on the task input it saves an active edit session if one
/// exists and adds a task otherwise.
fn handle_text_entry_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Enter if !key.modifiers.contains(KeyModifiers::SHIFT) => match app.ui_mode {
            UiMode::AddingProject => app.submit_project_input(),
            UiMode::AddingTask => {
                if let Some(row) = app.selected_row() {
                    app.submit_task_input(row.project_id);
                } else {
                    app.cancel_input();
                }
            }
            UiMode::EditingProjectName | UiMode::EditingTaskText => app.commit_edit(),
            UiMode::EditingDueDate => app.commit_due_date(),
            UiMode::Searching | UiMode::Normal => app.ui_mode = UiMode::Normal,
        },
        KeyCode::Backspace => {
            if let Some(buffer) = app.input_buffer_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(buffer) = app.input_buffer_mut() {
                buffer.push(c);
            }
        }
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, press(KeyCode::Char(c))).unwrap();
        }
    }

    fn app_with_project_and_task() -> AppState {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('A'))).unwrap();
        type_text(&mut app, "Errands");
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "buy milk");
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        app
    }

    #[test]
    fn test_quit_key() {
        let mut app = AppState::new();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_enter_on_project_input_adds_project() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('A'))).unwrap();
        type_text(&mut app, "Errands");
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.store.projects.len(), 1);
        assert_eq!(app.store.projects[0].name, "Errands");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_shift_enter_does_not_commit() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('A'))).unwrap();
        type_text(&mut app, "Errands");
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT),
        )
        .unwrap();

        assert!(app.store.projects.is_empty());
        assert_eq!(app.ui_mode, UiMode::AddingProject);
    }

    #[test]
    fn test_enter_on_task_input_adds_task() {
        let app = app_with_project_and_task();
        assert_eq!(app.store.projects[0].tasks.len(), 1);
        assert_eq!(app.store.projects[0].tasks[0].text, "buy milk");
    }

    #[test]
    fn test_enter_saves_edit_session_instead_of_adding() {
        let mut app = app_with_project_and_task();

        // Select the task, open an edit, append text, commit with Enter
        handle_key(&mut app, press(KeyCode::Down)).unwrap();
        handle_key(&mut app, press(KeyCode::Char('e'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingTaskText);
        type_text(&mut app, " and eggs");
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.store.projects[0].tasks.len(), 1);
        assert_eq!(app.store.projects[0].tasks[0].text, "buy milk and eggs");
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut app = app_with_project_and_task();
        handle_key(&mut app, press(KeyCode::Down)).unwrap();
        handle_key(&mut app, press(KeyCode::Char('e'))).unwrap();
        type_text(&mut app, "zzz");
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();

        assert_eq!(app.store.projects[0].tasks[0].text, "buy milk");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_backspace_edits_buffer() {
        let mut app = AppState::new();
        handle_key(&mut app, press(KeyCode::Char('A'))).unwrap();
        type_text(&mut app, "Errandss");
        handle_key(&mut app, press(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.store.projects[0].name, "Errands");
    }

    #[test]
    fn test_space_toggles_completion() {
        let mut app = app_with_project_and_task();
        handle_key(&mut app, press(KeyCode::Down)).unwrap();
        handle_key(&mut app, press(KeyCode::Char(' '))).unwrap();
        assert!(app.store.projects[0].tasks[0].completed);
    }

    #[test]
    fn test_enter_on_task_row_toggles_stopwatch() {
        let mut app = app_with_project_and_task();
        handle_key(&mut app, press(KeyCode::Down)).unwrap();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert!(app.store.projects[0].tasks[0].is_tracking());
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert!(!app.store.projects[0].tasks[0].is_tracking());
    }

    #[test]
    fn test_search_mode_collects_term() {
        let mut app = app_with_project_and_task();
        handle_key(&mut app, press(KeyCode::Char('/'))).unwrap();
        type_text(&mut app, "milk");
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.filter.search_term, "milk");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}
