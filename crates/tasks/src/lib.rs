//! `unitask-tasks` — task domain model and status lifecycle.

pub mod lifecycle;
pub mod task;

pub use lifecycle::StatusPolicy;
pub use task::{NewTask, Task, TaskFields, TaskStatus};
