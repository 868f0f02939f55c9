pub mod enums;
pub mod format;
pub mod project;

pub use enums::{ParsePriorityError, Priority, UiMode};
pub use format::{format_due_date, format_time};
pub use project::{EntityId, Project, Task};
