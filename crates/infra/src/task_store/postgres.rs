use async_trait::async_trait;
use sqlx::{PgPool, Row};

use unitask_tasks::{NewTask, Task, TaskFields, TaskStatus};

use super::TaskStore;
use crate::StoreError;

/// Postgres-backed task store.
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id BIGSERIAL PRIMARY KEY,
                title VARCHAR(100) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category VARCHAR(50) NOT NULL DEFAULT 'General',
                deadline_date DATE,
                deadline_time TIME,
                status VARCHAR(20) NOT NULL DEFAULT 'TODO'
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn task_from_row(row: &sqlx::postgres::PgRow) -> Result<Task, StoreError> {
    let status: String = row.try_get("status")?;
    Ok(Task {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        category: row.try_get("category")?,
        deadline_date: row.try_get("deadline_date")?,
        deadline_time: row.try_get("deadline_time")?,
        status: status
            .parse()
            .map_err(|e| StoreError::Corrupt(format!("tasks.status: {e}")))?,
    })
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn create(&self, new: NewTask) -> Result<Task, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO tasks (title, description, category, deadline_date, deadline_time, status)
            VALUES ($1, $2, $3, $4, $5, 'TODO')
            RETURNING id
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.category)
        .bind(new.deadline_date)
        .bind(new.deadline_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(Task {
            id: row.try_get("id")?,
            title: new.title,
            description: new.description,
            category: new.category,
            deadline_date: new.deadline_date,
            deadline_time: new.deadline_time,
            status: TaskStatus::Todo,
        })
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, category, deadline_date, deadline_time, status
            FROM tasks
            ORDER BY deadline_date ASC NULLS LAST, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(task_from_row).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, category, deadline_date, deadline_time, status
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(task_from_row).transpose()
    }

    async fn update(&self, id: i64, fields: TaskFields) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE tasks
            SET title = $1, description = $2, category = $3,
                deadline_date = $4, deadline_time = $5
            WHERE id = $6
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(&fields.category)
        .bind(fields.deadline_date)
        .bind(fields.deadline_time)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn set_status(&self, id: i64, status: TaskStatus) -> Result<(), StoreError> {
        sqlx::query("UPDATE tasks SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
