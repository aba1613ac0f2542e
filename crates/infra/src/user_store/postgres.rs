use async_trait::async_trait;
use sqlx::{PgPool, Row};

use unitask_users::{NewUser, User, UserRecord, UserUpdate};

use super::UserStore;
use crate::StoreError;

/// Postgres-backed credential store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the users table if it does not exist yet. Run once at startup,
    /// after the readiness probe.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                nim VARCHAR(32) NOT NULL UNIQUE,
                role VARCHAR(16) NOT NULL DEFAULT 'Student',
                password_hash VARCHAR(255) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn record_from_row(row: &sqlx::postgres::PgRow) -> Result<UserRecord, StoreError> {
    let role: String = row.try_get("role")?;
    Ok(UserRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        nim: row.try_get("nim")?,
        role: role
            .parse()
            .map_err(|e| StoreError::Corrupt(format!("users.role: {e}")))?,
        password_hash: row.try_get("password_hash")?,
    })
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, nim, role, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new.name)
        .bind(&new.nim)
        .bind(new.role.as_str())
        .bind(&new.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "nim already registered"))?;

        Ok(User {
            id: row.try_get("id")?,
            name: new.name,
            nim: new.nim,
            role: new.role,
        })
    }

    async fn find_by_nim(&self, nim: &str) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, nim, role, password_hash FROM users WHERE nim = $1",
        )
        .bind(nim)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(record_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        // The hash column is not selected: projections can never leak it.
        let rows = sqlx::query("SELECT id, name, nim, role FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                let role: String = row.try_get("role")?;
                Ok(User {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    nim: row.try_get("nim")?,
                    role: role
                        .parse()
                        .map_err(|e| StoreError::Corrupt(format!("users.role: {e}")))?,
                })
            })
            .collect()
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE users SET
                name = COALESCE($1, name),
                nim = COALESCE($2, nim),
                role = COALESCE($3, role),
                password_hash = COALESCE($4, password_hash)
            WHERE id = $5
            "#,
        )
        .bind(update.name)
        .bind(update.nim)
        .bind(update.role.map(|r| r.as_str()))
        .bind(update.password_hash)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "nim already registered"))?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
