use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use unitask_auth::{password, require_role, Claims, Role};
use unitask_users::{validate_registration, NewUser, UserUpdate};

use crate::dto::{LoginRequest, LoginResponse, LoginUser, RegisterRequest, UpdateUserRequest};
use crate::errors::{
    auth_error_to_response, domain_error_to_response, json_error, store_error_to_response,
};
use crate::AppState;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn register(
    Extension(state): Extension<AppState>,
    Json(body): Json<RegisterRequest>,
) -> axum::response::Response {
    if let Err(e) = validate_registration(&body.name, &body.nim, &body.password) {
        return domain_error_to_response(e);
    }

    let hash = match password::hash_password(&body.password) {
        Ok(h) => h,
        Err(e) => return json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", e.to_string()),
    };

    let new = NewUser {
        name: body.name,
        nim: body.nim,
        role: body.role.unwrap_or(Role::Student),
        password_hash: hash,
    };

    match state.store.create(new).await {
        Ok(user) => (StatusCode::OK, Json(crate::dto::user_to_json(&user))).into_response(),
        Err(e) => store_error_to_response(e),
    }
}

pub async fn login(
    Extension(state): Extension<AppState>,
    Json(body): Json<LoginRequest>,
) -> axum::response::Response {
    let record = match state.store.find_by_nim(&body.nim).await {
        Ok(r) => r,
        Err(e) => return store_error_to_response(e),
    };

    // Unknown nim and wrong password produce the identical rejection.
    let Some(record) = record else {
        return json_error(StatusCode::UNAUTHORIZED, "unauthorized", "invalid credentials");
    };
    if !password::verify_password(&body.password, &record.password_hash) {
        return json_error(StatusCode::UNAUTHORIZED, "unauthorized", "invalid credentials");
    }

    let token = match state.signer.issue(record.id, &record.name, record.role) {
        Ok(t) => t,
        Err(e) => return json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", e.to_string()),
    };

    tracing::info!(user_id = record.id, "login succeeded");
    (
        StatusCode::OK,
        Json(LoginResponse {
            token,
            user: LoginUser::from(&record),
        }),
    )
        .into_response()
}

/// Any valid token may list users; the projection never includes hashes.
pub async fn list_users(
    Extension(state): Extension<AppState>,
    Extension(_claims): Extension<Claims>,
) -> axum::response::Response {
    match state.store.list().await {
        Ok(users) => {
            let items: Vec<_> = users.iter().map(crate::dto::user_to_json).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => store_error_to_response(e),
    }
}

pub async fn create_user(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<RegisterRequest>,
) -> axum::response::Response {
    if let Err(e) = require_role(&claims, Role::Admin) {
        return auth_error_to_response(&e);
    }
    if let Err(e) = validate_registration(&body.name, &body.nim, &body.password) {
        return domain_error_to_response(e);
    }

    let hash = match password::hash_password(&body.password) {
        Ok(h) => h,
        Err(e) => return json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", e.to_string()),
    };

    let new = NewUser {
        name: body.name,
        nim: body.nim,
        role: body.role.unwrap_or(Role::Student),
        password_hash: hash,
    };

    match state.store.create(new).await {
        Ok(user) => (StatusCode::CREATED, Json(crate::dto::user_to_json(&user))).into_response(),
        Err(e) => store_error_to_response(e),
    }
}

pub async fn update_user(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateUserRequest>,
) -> axum::response::Response {
    if let Err(e) = require_role(&claims, Role::Admin) {
        return auth_error_to_response(&e);
    }

    // Empty password means "keep the current one".
    let password_hash = match body.password.as_deref() {
        None | Some("") => None,
        Some(pw) => match password::hash_password(pw) {
            Ok(h) => Some(h),
            Err(e) => {
                return json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", e.to_string())
            }
        },
    };

    let update = UserUpdate {
        name: Some(body.name),
        nim: Some(body.nim),
        role: Some(body.role),
        password_hash,
    };

    match state.store.update(id, update).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "message": "user updated" })))
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}

pub async fn delete_user(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    if let Err(e) = require_role(&claims, Role::Admin) {
        return auth_error_to_response(&e);
    }

    // Deletion is idempotent: unknown ids succeed silently.
    match state.store.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "message": "user deleted" })))
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}
