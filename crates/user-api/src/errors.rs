use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use unitask_auth::AuthError;
use unitask_core::DomainError;
use unitask_infra::StoreError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn auth_error_to_response(err: &AuthError) -> axum::response::Response {
    match err {
        AuthError::Unauthenticated | AuthError::InvalidToken => {
            json_error(StatusCode::UNAUTHORIZED, "unauthorized", err.to_string())
        }
        AuthError::Forbidden(_) => json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string()),
    }
}

/// Store failures surface as a generic 500 with the raw message. Conflicts
/// are deliberately not distinguished here: that matches the current
/// contract (a duplicate nim registers as a generic failure, not a 409).
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
    }
}
