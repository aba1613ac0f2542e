use serde::{Deserialize, Serialize};

use unitask_auth::Role;
use unitask_core::DomainError;

/// Public projection of a user.
///
/// This is the shape returned to callers: the password hash is structurally
/// absent, so no projection can leak it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Identifying number (NIM). Globally unique, immutable after creation
    /// in the normal flow.
    pub nim: String,
    pub role: Role,
}

/// Store-internal user row, including the Argon2 hash. Never serialized to
/// clients.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub nim: String,
    pub role: Role,
    pub password_hash: String,
}

impl From<UserRecord> for User {
    fn from(rec: UserRecord) -> Self {
        Self {
            id: rec.id,
            name: rec.name,
            nim: rec.nim,
            role: rec.role,
        }
    }
}

/// Fields for creating a user. The password is already hashed by the time it
/// reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub nim: String,
    pub role: Role,
    pub password_hash: String,
}

/// Partial update. `None` fields keep their stored value; in particular an
/// absent password preserves the existing hash, which is the contract admin
/// edits rely on.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub nim: Option<String>,
    pub role: Option<Role>,
    pub password_hash: Option<String>,
}

/// Validate registration input before hashing/storage.
pub fn validate_registration(name: &str, nim: &str, password: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name is required"));
    }
    if nim.trim().is_empty() {
        return Err(DomainError::validation("nim is required"));
    }
    if password.is_empty() {
        return Err(DomainError::validation("password is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_drops_hash() {
        let rec = UserRecord {
            id: 1,
            name: "Alice".into(),
            nim: "1001".into(),
            role: Role::Student,
            password_hash: "$argon2id$...".into(),
        };
        let user: User = rec.into();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["nim"], "1001");
    }

    #[test]
    fn registration_requires_all_fields() {
        assert!(validate_registration("Alice", "1001", "pw").is_ok());
        assert!(validate_registration("", "1001", "pw").is_err());
        assert!(validate_registration("Alice", "  ", "pw").is_err());
        assert!(validate_registration("Alice", "1001", "").is_err());
    }
}
