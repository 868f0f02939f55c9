use super::enums::Priority;
use chrono::{DateTime, Local, NaiveDate};

/// Unique identifier for projects and tasks
pub type EntityId = u64;

/// A unit of work with completion, priority, due date, and tracked time
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique ID, assigned by the store at creation
    pub id: EntityId,
    /// Display text
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
    /// Priority level
    pub priority: Priority,
    /// Optional due date (no time component)
    pub due_date: Option<NaiveDate>,
    /// Accumulated tracked time in seconds (fractional)
    pub time_spent: f64,
    /// Start of the currently open tracking interval, if any.
    /// A task is tracking exactly when this is set.
    pub start_time: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(id: EntityId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority: Priority::default(),
            due_date: None,
            time_spent: 0.0,
            start_time: None,
        }
    }

    /// Whether a tracking interval is currently open
    pub fn is_tracking(&self) -> bool {
        self.start_time.is_some()
    }

    /// Open a tracking interval at `now`
    pub fn start_tracking(&mut self, now: DateTime<Local>) {
        self.start_time = Some(now);
    }

    /// Close the tracking interval, accumulating elapsed time.
    /// Does nothing if no interval is open.
    pub fn stop_tracking(&mut self, now: DateTime<Local>) {
        if let Some(start) = self.start_time.take() {
            self.time_spent += seconds_between(start, now);
        }
    }

    /// Accumulate elapsed time for an open interval and reset its
    /// reference point to `now`, so repeated calls never double-count.
    pub fn accrue(&mut self, now: DateTime<Local>) {
        if let Some(start) = self.start_time {
            self.time_spent += seconds_between(start, now);
            self.start_time = Some(now);
        }
    }
}

/// A named container of tasks
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Unique ID, assigned by the store at creation
    pub id: EntityId,
    /// Display name
    pub name: String,
    /// Tasks in insertion order (= display order)
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn new(id: EntityId, name: String) -> Self {
        Self {
            id,
            name,
            tasks: Vec::new(),
        }
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

/// Fractional seconds from `start` to `now`, clamped at zero so
/// tracked time never decreases on a clock hiccup
fn seconds_between(start: DateTime<Local>, now: DateTime<Local>) -> f64 {
    let millis = (now - start).num_milliseconds();
    (millis as f64 / 1000.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new(1, "Write report".to_string());
        assert_eq!(task.id, 1);
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.due_date.is_none());
        assert_eq!(task.time_spent, 0.0);
        assert!(!task.is_tracking());
    }

    #[test]
    fn test_start_stop_tracking_accumulates() {
        let mut task = Task::new(1, "Test".to_string());
        let t0 = Local::now();
        task.start_tracking(t0);
        assert!(task.is_tracking());

        task.stop_tracking(t0 + Duration::seconds(90));
        assert!(!task.is_tracking());
        assert!((task.time_spent - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_stop_tracking_without_start_is_noop() {
        let mut task = Task::new(1, "Test".to_string());
        task.stop_tracking(Local::now());
        assert_eq!(task.time_spent, 0.0);
        assert!(!task.is_tracking());
    }

    #[test]
    fn test_accrue_resets_reference_point() {
        let mut task = Task::new(1, "Test".to_string());
        let t0 = Local::now();
        task.start_tracking(t0);

        // Two accruals over a 5 second window must sum to 5 seconds
        task.accrue(t0 + Duration::seconds(2));
        task.accrue(t0 + Duration::seconds(5));
        assert!((task.time_spent - 5.0).abs() < 1e-9);
        assert_eq!(task.start_time, Some(t0 + Duration::seconds(5)));
    }

    #[test]
    fn test_accrue_ignores_non_tracking_task() {
        let mut task = Task::new(1, "Test".to_string());
        task.accrue(Local::now());
        assert_eq!(task.time_spent, 0.0);
    }

    #[test]
    fn test_backwards_clock_never_decreases_time() {
        let mut task = Task::new(1, "Test".to_string());
        let t0 = Local::now();
        task.time_spent = 10.0;
        task.start_tracking(t0);
        task.stop_tracking(t0 - Duration::seconds(30));
        assert_eq!(task.time_spent, 10.0);
    }

    #[test]
    fn test_project_completed_count() {
        let mut project = Project::new(1, "Home".to_string());
        project.tasks.push(Task::new(2, "a".to_string()));
        project.tasks.push(Task::new(3, "b".to_string()));
        project.tasks[1].completed = true;
        assert_eq!(project.completed_count(), 1);
    }
}
