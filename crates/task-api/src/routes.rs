use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use unitask_core::DomainError;
use unitask_tasks::{NewTask, StatusPolicy, TaskFields};

use crate::dto::{parse_deadline_time, CreateTaskRequest, SetStatusRequest, UpdateTaskRequest};
use crate::errors::{domain_error_to_response, json_error, store_error_to_response};
use crate::AppState;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn list_tasks(Extension(state): Extension<AppState>) -> axum::response::Response {
    match state.store.list().await {
        Ok(tasks) => (StatusCode::OK, Json(tasks)).into_response(),
        Err(e) => store_error_to_response(e),
    }
}

pub async fn create_task(
    Extension(state): Extension<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> axum::response::Response {
    if body.title.trim().is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "validation_error", "title is required");
    }
    let deadline_time = match parse_deadline_time(body.deadline_time.as_deref()) {
        Ok(t) => t,
        Err(e) => return domain_error_to_response(e),
    };

    let new = NewTask {
        title: body.title,
        description: body.description,
        category: body.category,
        deadline_date: body.deadline_date,
        deadline_time,
    };

    match state.store.create(new).await {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(e) => store_error_to_response(e),
    }
}

pub async fn update_task(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTaskRequest>,
) -> axum::response::Response {
    if body.title.trim().is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "validation_error", "title is required");
    }
    let deadline_time = match parse_deadline_time(body.deadline_time.as_deref()) {
        Ok(t) => t,
        Err(e) => return domain_error_to_response(e),
    };

    let fields = TaskFields {
        title: body.title,
        description: body.description,
        category: body.category,
        deadline_date: body.deadline_date,
        deadline_time,
    };

    match state.store.update(id, fields).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "message": "task updated" })))
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}

pub async fn set_status(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SetStatusRequest>,
) -> axum::response::Response {
    // Under the Enforced policy the current status must be read first;
    // Permissive writes blindly and unknown ids stay a silent no-op.
    if state.policy == StatusPolicy::Enforced {
        let current = match state.store.get(id).await {
            Ok(Some(task)) => task.status,
            Ok(None) => return domain_error_to_response(DomainError::NotFound),
            Err(e) => return store_error_to_response(e),
        };
        if let Err(e) = state.policy.check(current, body.status) {
            return json_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_transition",
                e.to_string(),
            );
        }
    }

    match state.store.set_status(id, body.status).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "message": "status updated" })))
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}

pub async fn delete_task(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    // Idempotent: unknown ids succeed silently.
    match state.store.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "message": "task deleted" })))
            .into_response(),
        Err(e) => store_error_to_response(e),
    }
}
