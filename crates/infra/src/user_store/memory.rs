use std::sync::Mutex;

use async_trait::async_trait;

use unitask_users::{NewUser, User, UserRecord, UserUpdate};

use super::UserStore;
use crate::StoreError;

/// In-memory credential store for tests and local development.
///
/// Mirrors the Postgres implementation's contract, including the unique-nim
/// constraint and idempotent deletes.
#[derive(Default)]
pub struct InMemoryUserStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: Vec<UserRecord>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.rows.iter().any(|r| r.nim == new.nim) {
            return Err(StoreError::Conflict("nim already registered".to_string()));
        }
        inner.next_id += 1;
        let rec = UserRecord {
            id: inner.next_id,
            name: new.name,
            nim: new.nim,
            role: new.role,
            password_hash: new.password_hash,
        };
        let user = User::from(rec.clone());
        inner.rows.push(rec);
        Ok(user)
    }

    async fn find_by_nim(&self, nim: &str) -> Result<Option<UserRecord>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|r| r.nim == nim).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().cloned().map(User::from).collect())
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(nim) = &update.nim {
            if inner.rows.iter().any(|r| r.nim == *nim && r.id != id) {
                return Err(StoreError::Conflict("nim already registered".to_string()));
            }
        }
        if let Some(rec) = inner.rows.iter_mut().find(|r| r.id == id) {
            if let Some(name) = update.name {
                rec.name = name;
            }
            if let Some(nim) = update.nim {
                rec.nim = nim;
            }
            if let Some(role) = update.role {
                rec.role = role;
            }
            if let Some(hash) = update.password_hash {
                rec.password_hash = hash;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.rows.retain(|r| r.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitask_auth::Role;

    fn new_user(nim: &str) -> NewUser {
        NewUser {
            name: format!("User {nim}"),
            nim: nim.to_string(),
            role: Role::Student,
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_nim_conflicts() {
        let store = InMemoryUserStore::new();
        store.create(new_user("1001")).await.unwrap();

        let err = store.create(new_user("1001")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn distinct_nims_stay_unique() {
        let store = InMemoryUserStore::new();
        for nim in ["1001", "1002", "1003"] {
            store.create(new_user(nim)).await.unwrap();
        }
        let users = store.list().await.unwrap();
        let mut nims: Vec<_> = users.iter().map(|u| u.nim.clone()).collect();
        nims.sort();
        nims.dedup();
        assert_eq!(nims.len(), 3);
    }

    #[tokio::test]
    async fn update_without_password_preserves_hash() {
        let store = InMemoryUserStore::new();
        let user = store.create(new_user("1001")).await.unwrap();

        store
            .update(
                user.id,
                UserUpdate {
                    name: Some("Renamed".to_string()),
                    password_hash: None,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let rec = store.find_by_nim("1001").await.unwrap().unwrap();
        assert_eq!(rec.name, "Renamed");
        assert_eq!(rec.password_hash, "$argon2id$stub");
    }

    #[tokio::test]
    async fn update_with_password_replaces_hash() {
        let store = InMemoryUserStore::new();
        let user = store.create(new_user("1001")).await.unwrap();

        store
            .update(
                user.id,
                UserUpdate {
                    password_hash: Some("$argon2id$fresh".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let rec = store.find_by_nim("1001").await.unwrap().unwrap();
        assert_eq!(rec.password_hash, "$argon2id$fresh");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryUserStore::new();
        let user = store.create(new_user("1001")).await.unwrap();

        store.delete(user.id).await.unwrap();
        store.delete(user.id).await.unwrap();
        store.delete(9999).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_unknown_id_is_noop() {
        let store = InMemoryUserStore::new();
        store
            .update(42, UserUpdate { name: Some("x".into()), ..Default::default() })
            .await
            .unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
