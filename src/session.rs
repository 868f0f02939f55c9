use crate::domain::{EntityId, Project, Task};
use crate::store::Store;

/// An in-progress rename of a project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEdit {
    pub project_id: EntityId,
    pub name: String,
}

/// An in-progress rewrite of a task's text
#[derive(Debug, Clone, PartialEq)]
pub struct TaskEdit {
    pub task_id: EntityId,
    pub text: String,
}

/// Transient editing state, held beside the entity store rather than in it.
/// The two edits are independent fields, but the UI opens at most one at a
/// time; that is a policy of the callers, not enforced here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    pub project: Option<ProjectEdit>,
    pub task: Option<TaskEdit>,
}

impl EditSession {
    /// Begin editing a project name, capturing its current value
    pub fn start_editing_project(&mut self, project: &Project) {
        self.project = Some(ProjectEdit {
            project_id: project.id,
            name: project.name.clone(),
        });
    }

    /// Begin editing a task's text, capturing its current value
    pub fn start_editing_task(&mut self, task: &Task) {
        self.task = Some(TaskEdit {
            task_id: task.id,
            text: task.text.clone(),
        });
    }

    /// Commit the project-name edit and clear it.
    /// Returns the store unchanged when no edit is active.
    pub fn save_editing_project(&mut self, store: &Store) -> Store {
        match self.project.take() {
            Some(edit) => store.edit_project(edit.project_id, &edit.name),
            None => store.clone(),
        }
    }

    /// Commit the task-text edit into the given project and clear it.
    /// Returns the store unchanged when no edit is active.
    pub fn save_editing_task(&mut self, store: &Store, project_id: EntityId) -> Store {
        match self.task.take() {
            Some(edit) => store.edit_task_text(project_id, edit.task_id, &edit.text),
            None => store.clone(),
        }
    }

    /// Abandon any active edit without touching the store
    pub fn cancel(&mut self) {
        self.project = None;
        self.task = None;
    }

    /// Whether a task-text edit is active (drives the Enter-key policy)
    pub fn is_editing_task(&self) -> bool {
        self.task.is_some()
    }

    /// Mutable text buffer of the active edit, if any
    pub fn active_buffer(&mut self) -> Option<&mut String> {
        if let Some(edit) = &mut self.project {
            return Some(&mut edit.name);
        }
        if let Some(edit) = &mut self.task {
            return Some(&mut edit.text);
        }
        None
    }
}
