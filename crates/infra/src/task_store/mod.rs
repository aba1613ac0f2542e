//! Task store: CRUD over task rows.
//!
//! The store itself performs no transition validation; the lifecycle rule
//! lives in `unitask_tasks::StatusPolicy` and is applied (or not) by the
//! service layer.

use async_trait::async_trait;

use unitask_tasks::{NewTask, Task, TaskFields, TaskStatus};

use crate::StoreError;

mod memory;
mod postgres;

pub use memory::InMemoryTaskStore;
pub use postgres::PgTaskStore;

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Create a task. Status is always TODO; callers cannot supply one.
    async fn create(&self, new: NewTask) -> Result<Task, StoreError>;

    /// All tasks, ordered by deadline date ascending with NULL deadlines
    /// last; ties broken by id ascending so listings are deterministic.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError>;

    /// Full-field replace of everything except status.
    async fn update(&self, id: i64, fields: TaskFields) -> Result<(), StoreError>;

    /// Write the status as-is. Unknown ids are a silent no-op.
    async fn set_status(&self, id: i64, status: TaskStatus) -> Result<(), StoreError>;

    /// Idempotent: unconditional success whether or not the id exists.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
