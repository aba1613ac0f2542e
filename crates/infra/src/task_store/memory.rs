use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use unitask_tasks::{NewTask, Task, TaskFields, TaskStatus};

use super::TaskStore;
use crate::StoreError;

/// In-memory task store for tests and local development.
#[derive(Default)]
pub struct InMemoryTaskStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: Vec<Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// NULL deadlines sort last, matching Postgres ASC NULLS LAST.
fn sort_key(task: &Task) -> (bool, NaiveDate, i64) {
    (
        task.deadline_date.is_none(),
        task.deadline_date.unwrap_or(NaiveDate::MIN),
        task.id,
    )
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, new: NewTask) -> Result<Task, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let task = Task {
            id: inner.next_id,
            title: new.title,
            description: new.description,
            category: new.category,
            deadline_date: new.deadline_date,
            deadline_time: new.deadline_time,
            status: TaskStatus::Todo,
        };
        inner.rows.push(task.clone());
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut rows = inner.rows.clone();
        rows.sort_by_key(sort_key);
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|t| t.id == id).cloned())
    }

    async fn update(&self, id: i64, fields: TaskFields) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(task) = inner.rows.iter_mut().find(|t| t.id == id) {
            task.title = fields.title;
            task.description = fields.description;
            task.category = fields.category;
            task.deadline_date = fields.deadline_date;
            task.deadline_time = fields.deadline_time;
        }
        Ok(())
    }

    async fn set_status(&self, id: i64, status: TaskStatus) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(task) = inner.rows.iter_mut().find(|t| t.id == id) {
            task.status = status;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.rows.retain(|t| t.id != id);
        Ok(())
    }
}
