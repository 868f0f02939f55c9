use crate::domain::{EntityId, Priority, Project, Task};
use chrono::{DateTime, Local, NaiveDate};

/// In-memory entity store: an ordered collection of projects, each
/// owning its tasks, plus the open/closed view-state per project.
///
/// Every operation takes `&self` and returns a new store. Invalid input
/// (empty names, unmatched ids) leaves the store unchanged; nothing here
/// ever fails. Operations that touch the clock take `now` explicitly so
/// tests can drive time deterministically.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub projects: Vec<Project>,
    /// Ids of projects currently expanded in the view
    pub open_projects: Vec<EntityId>,
    /// Monotonic id counter shared by projects and tasks
    next_id: EntityId,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            open_projects: Vec::new(),
            next_id: 1,
        }
    }

    fn fresh_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Look up a project by id
    pub fn project(&self, project_id: EntityId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Look up a task by project and task id
    pub fn task(&self, project_id: EntityId, task_id: EntityId) -> Option<&Task> {
        self.project(project_id)?.tasks.iter().find(|t| t.id == task_id)
    }

    /// Whether a project is expanded in the view
    pub fn is_open(&self, project_id: EntityId) -> bool {
        self.open_projects.contains(&project_id)
    }

    /// Append a new project with a fresh id and mark it open.
    /// No-op if the name is empty or whitespace-only.
    pub fn add_project(&self, name: &str) -> Store {
        if name.trim().is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        let id = next.fresh_id();
        next.projects.push(Project::new(id, name.to_string()));
        next.open_projects.push(id);
        next
    }

    /// Rename a project; silent no-op on an unmatched id
    pub fn edit_project(&self, project_id: EntityId, new_name: &str) -> Store {
        self.with_project(project_id, |project| {
            project.name = new_name.to_string();
        })
    }

    /// Remove a project together with all its tasks and its open-state entry
    pub fn delete_project(&self, project_id: EntityId) -> Store {
        let mut next = self.clone();
        next.projects.retain(|p| p.id != project_id);
        next.open_projects.retain(|id| *id != project_id);
        next
    }

    /// Flip a project's expanded state
    pub fn toggle_project_open(&self, project_id: EntityId) -> Store {
        if self.project(project_id).is_none() {
            return self.clone();
        }
        let mut next = self.clone();
        if let Some(pos) = next.open_projects.iter().position(|id| *id == project_id) {
            next.open_projects.remove(pos);
        } else {
            next.open_projects.push(project_id);
        }
        next
    }

    /// Append a task with default fields to a project.
    /// No-op if the text is empty or the project does not exist.
    pub fn add_task(&self, project_id: EntityId, text: &str) -> Store {
        if text.trim().is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        let id = next.fresh_id();
        let Some(project) = next.projects.iter_mut().find(|p| p.id == project_id) else {
            return self.clone();
        };
        project.tasks.push(Task::new(id, text.to_string()));
        next
    }

    /// Flip a task's completed flag
    pub fn toggle_task(&self, project_id: EntityId, task_id: EntityId) -> Store {
        self.with_task(project_id, task_id, |task| {
            task.completed = !task.completed;
        })
    }

    /// Remove a task from its project
    pub fn delete_task(&self, project_id: EntityId, task_id: EntityId) -> Store {
        self.with_project(project_id, |project| {
            project.tasks.retain(|t| t.id != task_id);
        })
    }

    /// Replace a task's display text
    pub fn edit_task_text(&self, project_id: EntityId, task_id: EntityId, text: &str) -> Store {
        self.with_task(project_id, task_id, |task| {
            task.text = text.to_string();
        })
    }

    /// Set a task's priority
    pub fn update_task_priority(
        &self,
        project_id: EntityId,
        task_id: EntityId,
        priority: Priority,
    ) -> Store {
        self.with_task(project_id, task_id, |task| {
            task.priority = priority;
        })
    }

    /// Set or clear a task's due date
    pub fn update_task_due_date(
        &self,
        project_id: EntityId,
        task_id: EntityId,
        due_date: Option<NaiveDate>,
    ) -> Store {
        self.with_task(project_id, task_id, |task| {
            task.due_date = due_date;
        })
    }

    /// Start tracking if the task is stopped, stop and accumulate elapsed
    /// time if it is tracking. Stopwatches are independent per task;
    /// any number may run at once.
    pub fn toggle_time_tracking(
        &self,
        project_id: EntityId,
        task_id: EntityId,
        now: DateTime<Local>,
    ) -> Store {
        self.with_task(project_id, task_id, |task| {
            if task.is_tracking() {
                task.stop_tracking(now);
            } else {
                task.start_tracking(now);
            }
        })
    }

    /// Unconditionally stop tracking. Accumulates elapsed time only when
    /// an interval is actually open; a stopped task stays untouched.
    pub fn stop_time_tracking(
        &self,
        project_id: EntityId,
        task_id: EntityId,
        now: DateTime<Local>,
    ) -> Store {
        self.with_task(project_id, task_id, |task| {
            task.stop_tracking(now);
        })
    }

    /// Advance every tracking task: accumulate time since its reference
    /// point and reset that point to `now`. Firing this N times over a
    /// window adds the window once, regardless of N.
    pub fn tick(&self, now: DateTime<Local>) -> Store {
        let mut next = self.clone();
        for project in &mut next.projects {
            for task in &mut project.tasks {
                task.accrue(now);
            }
        }
        next
    }

    /// Clone the store and apply `f` to the matching project.
    /// Unmatched id returns an unchanged clone.
    fn with_project<F>(&self, project_id: EntityId, f: F) -> Store
    where
        F: FnOnce(&mut Project),
    {
        let mut next = self.clone();
        if let Some(project) = next.projects.iter_mut().find(|p| p.id == project_id) {
            f(project);
        }
        next
    }

    /// Clone the store and apply `f` to the matching task.
    /// Unmatched ids return an unchanged clone.
    fn with_task<F>(&self, project_id: EntityId, task_id: EntityId, f: F) -> Store
    where
        F: FnOnce(&mut Task),
    {
        self.with_project(project_id, |project| {
            if let Some(task) = project.tasks.iter_mut().find(|t| t.id == task_id) {
                f(task);
            }
        })
    }
}
