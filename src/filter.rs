use crate::domain::{EntityId, Priority, Project, Task};
use crate::store::Store;

/// Priority facet of the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Next facet in the cycle all -> low -> medium -> high -> all
    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Only(Priority::Low),
            Self::Only(Priority::High) => Self::All,
            Self::Only(p) => Self::Only(p.cycle()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(p) => p.label(),
        }
    }
}

/// Completion facet of the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    #[default]
    All,
    Completed,
    Active,
}

impl CompletionFilter {
    /// Next facet in the cycle all -> active -> completed -> all
    pub fn cycle(&self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Active => "active",
        }
    }
}

/// Free-text, priority, and completion criteria combined with AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub search_term: String,
    pub priority: PriorityFilter,
    pub completed: CompletionFilter,
}

impl TaskFilter {
    /// Whether a task survives every facet. An empty search term
    /// matches everything.
    pub fn matches(&self, task: &Task) -> bool {
        let matches_search = task
            .text
            .to_lowercase()
            .contains(&self.search_term.to_lowercase());
        let matches_priority = match self.priority {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => task.priority == p,
        };
        let matches_completed = match self.completed {
            CompletionFilter::All => true,
            CompletionFilter::Completed => task.completed,
            CompletionFilter::Active => !task.completed,
        };
        matches_search && matches_priority && matches_completed
    }
}

/// A project together with the subset of its tasks surviving the filter
#[derive(Debug)]
pub struct FilteredProject<'a> {
    pub project: &'a Project,
    pub tasks: Vec<&'a Task>,
}

/// Derived view of the store: every project survives (possibly with an
/// empty task list), tasks keep their insertion order. Recomputed in
/// full on every read.
pub fn filtered_projects<'a>(projects: &'a [Project], filter: &TaskFilter) -> Vec<FilteredProject<'a>> {
    projects
        .iter()
        .map(|project| FilteredProject {
            project,
            tasks: project.tasks.iter().filter(|t| filter.matches(t)).collect(),
        })
        .collect()
}

/// A selectable row in the flattened project/task list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRow {
    pub project_id: EntityId,
    /// None for a project header row
    pub task_id: Option<EntityId>,
    /// Last task row under its project (for tree connectors)
    pub is_last: bool,
}

/// Flatten the filtered view into rows the UI selects over. Closed
/// projects contribute only their header row.
pub fn flatten_view(store: &Store, filter: &TaskFilter) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    for filtered in filtered_projects(&store.projects, filter) {
        rows.push(FlatRow {
            project_id: filtered.project.id,
            task_id: None,
            is_last: false,
        });
        if !store.is_open(filtered.project.id) {
            continue;
        }
        let count = filtered.tasks.len();
        for (i, task) in filtered.tasks.iter().enumerate() {
            rows.push(FlatRow {
                project_id: filtered.project.id,
                task_id: Some(task.id),
                is_last: i == count - 1,
            });
        }
    }
    rows
}
