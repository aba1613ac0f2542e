//! Credential store: persisted user records with hashed passwords.

use async_trait::async_trait;

use unitask_users::{NewUser, User, UserRecord, UserUpdate};

use crate::StoreError;

mod memory;
mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

/// Persisted user records.
///
/// Projections returned to callers ([`User`]) structurally exclude the
/// password hash; only `find_by_nim` exposes the full record, for login.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user. Fails with [`StoreError::Conflict`] if the identifying
    /// number is already taken.
    async fn create(&self, new: NewUser) -> Result<User, StoreError>;

    async fn find_by_nim(&self, nim: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Partial update; `None` fields are preserved, including the password
    /// hash. Unknown ids are a silent no-op.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<(), StoreError>;

    /// Idempotent: deleting an unknown id succeeds silently, matching the
    /// task store.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
