use crate::domain::{EntityId, UiMode};
use crate::filter::{flatten_view, FilteredProject, FlatRow, TaskFilter};
use crate::session::EditSession;
use crate::store::Store;
use chrono::{DateTime, Local, NaiveDate};

/// Main application state: the entity store plus the transient UI state
/// around it (filter, edit session, input buffers, selection). Owned by
/// the event loop and passed by reference into the input handler and
/// renderer.
pub struct AppState {
    pub store: Store,
    pub filter: TaskFilter,
    pub session: EditSession,
    pub ui_mode: UiMode,
    /// Pending name for a project being added
    pub new_project_input: String,
    /// Pending text for a task being added
    pub new_task_input: String,
    /// Pending due date text, YYYY-MM-DD (empty clears the date)
    pub due_date_input: String,
    /// Index into the flattened filtered rows
    pub selected_index: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            filter: TaskFilter::default(),
            session: EditSession::default(),
            ui_mode: UiMode::Normal,
            new_project_input: String::new(),
            new_task_input: String::new(),
            due_date_input: String::new(),
            selected_index: 0,
        }
    }

    /// Filtered view of the store for rendering
    pub fn filtered(&self) -> Vec<FilteredProject<'_>> {
        crate::filter::filtered_projects(&self.store.projects, &self.filter)
    }

    /// Selectable rows of the current view
    pub fn rows(&self) -> Vec<FlatRow> {
        flatten_view(&self.store, &self.filter)
    }

    /// The currently selected row, if any
    pub fn selected_row(&self) -> Option<FlatRow> {
        self.rows().get(self.selected_index).copied()
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.rows().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the row list after the view shrinks
    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Open the project-name input
    pub fn begin_add_project(&mut self) {
        self.new_project_input.clear();
        self.ui_mode = UiMode::AddingProject;
    }

    /// Open the task-text input, targeting the selected row's project
    pub fn begin_add_task(&mut self) {
        if self.selected_row().is_some() {
            self.new_task_input.clear();
            self.ui_mode = UiMode::AddingTask;
        }
    }

    /// Commit the project-name input. The pending input is cleared
    /// whether or not the store accepted the name.
    pub fn submit_project_input(&mut self) {
        self.store = self.store.add_project(&self.new_project_input);
        self.new_project_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Commit the task input for the given project: saves the active
    /// task edit if one is open, otherwise adds a new task.
    pub fn submit_task_input(&mut self, project_id: EntityId) {
        if self.session.is_editing_task() {
            self.store = self.session.save_editing_task(&self.store, project_id);
        } else {
            self.store = self.store.add_task(project_id, &self.new_task_input);
            self.new_task_input.clear();
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Begin renaming the selected project or rewriting the selected task
    pub fn begin_edit_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        match row.task_id {
            Some(task_id) => {
                if let Some(task) = self.store.task(row.project_id, task_id) {
                    self.session.start_editing_task(task);
                    self.ui_mode = UiMode::EditingTaskText;
                }
            }
            None => {
                if let Some(project) = self.store.project(row.project_id) {
                    self.session.start_editing_project(project);
                    self.ui_mode = UiMode::EditingProjectName;
                }
            }
        }
    }

    /// Commit whichever edit session is active
    pub fn commit_edit(&mut self) {
        match self.ui_mode {
            UiMode::EditingProjectName => {
                self.store = self.session.save_editing_project(&self.store);
                self.ui_mode = UiMode::Normal;
            }
            UiMode::EditingTaskText => {
                if let Some(row) = self.selected_row() {
                    self.submit_task_input(row.project_id);
                } else {
                    self.session.cancel();
                    self.ui_mode = UiMode::Normal;
                }
            }
            _ => {}
        }
    }

    /// Abandon any pending input or edit
    pub fn cancel_input(&mut self) {
        self.session.cancel();
        self.new_project_input.clear();
        self.new_task_input.clear();
        self.due_date_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Flip completion on the selected task
    pub fn toggle_selected_task(&mut self) {
        if let Some(row) = self.selected_row() {
            if let Some(task_id) = row.task_id {
                self.store = self.store.toggle_task(row.project_id, task_id);
                self.clamp_selection();
            }
        }
    }

    /// Delete the selected task, or the selected project with all its tasks
    pub fn delete_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            self.store = match row.task_id {
                Some(task_id) => self.store.delete_task(row.project_id, task_id),
                None => self.store.delete_project(row.project_id),
            };
            self.clamp_selection();
        }
    }

    /// Cycle the selected task's priority
    pub fn cycle_selected_priority(&mut self) {
        if let Some(row) = self.selected_row() {
            if let Some(task_id) = row.task_id {
                if let Some(task) = self.store.task(row.project_id, task_id) {
                    let next = task.priority.cycle();
                    self.store = self.store.update_task_priority(row.project_id, task_id, next);
                    self.clamp_selection();
                }
            }
        }
    }

    /// Start or stop the selected task's stopwatch
    pub fn toggle_selected_tracking(&mut self, now: DateTime<Local>) {
        if let Some(row) = self.selected_row() {
            if let Some(task_id) = row.task_id {
                self.store = self.store.toggle_time_tracking(row.project_id, task_id, now);
            }
        }
    }

    /// Unconditionally stop the selected task's stopwatch
    pub fn stop_selected_tracking(&mut self, now: DateTime<Local>) {
        if let Some(row) = self.selected_row() {
            if let Some(task_id) = row.task_id {
                self.store = self.store.stop_time_tracking(row.project_id, task_id, now);
            }
        }
    }

    /// Expand or collapse the selected row's project
    pub fn toggle_selected_project_open(&mut self) {
        if let Some(row) = self.selected_row() {
            self.store = self.store.toggle_project_open(row.project_id);
            self.clamp_selection();
        }
    }

    /// Open the due-date input, prefilled with the current date
    pub fn begin_due_date(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let Some(task_id) = row.task_id else {
            return;
        };
        if let Some(task) = self.store.task(row.project_id, task_id) {
            self.due_date_input = task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            self.ui_mode = UiMode::EditingDueDate;
        }
    }

    /// Commit the due-date input. Empty clears the date; an unparseable
    /// date leaves the task unchanged.
    pub fn commit_due_date(&mut self) {
        if let Some(row) = self.selected_row() {
            if let Some(task_id) = row.task_id {
                let text = self.due_date_input.trim();
                if text.is_empty() {
                    self.store = self.store.update_task_due_date(row.project_id, task_id, None);
                } else if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                    self.store = self
                        .store
                        .update_task_due_date(row.project_id, task_id, Some(date));
                }
            }
        }
        self.due_date_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Cycle the priority facet of the filter bar
    pub fn cycle_priority_filter(&mut self) {
        self.filter.priority = self.filter.priority.cycle();
        self.clamp_selection();
    }

    /// Cycle the completion facet of the filter bar
    pub fn cycle_completion_filter(&mut self) {
        self.filter.completed = self.filter.completed.cycle();
        self.clamp_selection();
    }

    /// Clear every filter facet
    pub fn clear_filters(&mut self) {
        self.filter = TaskFilter::default();
        self.clamp_selection();
    }

    /// Advance all running stopwatches to `now`
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.store = self.store.tick(now);
    }

    /// Text buffer receiving keystrokes in the current mode, if any
    pub fn input_buffer_mut(&mut self) -> Option<&mut String> {
        match self.ui_mode {
            UiMode::AddingProject => Some(&mut self.new_project_input),
            UiMode::AddingTask => Some(&mut self.new_task_input),
            UiMode::EditingDueDate => Some(&mut self.due_date_input),
            UiMode::Searching => Some(&mut self.filter.search_term),
            UiMode::EditingProjectName | UiMode::EditingTaskText => self.session.active_buffer(),
            UiMode::Normal => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
