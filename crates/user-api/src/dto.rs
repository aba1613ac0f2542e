//! Request/response DTOs for the user service.

use serde::{Deserialize, Serialize};

use unitask_auth::Role;
use unitask_users::User;

/// Body for `/register` and admin user creation. Role defaults to Student
/// for self-service registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub nim: String,
    pub role: Option<Role>,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub nim: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

/// The slice of the user the client needs after login.
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

impl From<&unitask_users::UserRecord> for LoginUser {
    fn from(rec: &unitask_users::UserRecord) -> Self {
        Self {
            id: rec.id,
            name: rec.name.clone(),
            role: rec.role,
        }
    }
}

/// Body for admin edits. An absent or empty password keeps the stored hash.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub nim: String,
    pub role: Role,
    pub password: Option<String>,
}

pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id,
        "name": user.name,
        "nim": user.nim,
        "role": user.role,
    })
}
