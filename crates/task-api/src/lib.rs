//! Task service.
//!
//! Every endpoint is unauthenticated by contract: only the user service
//! carries an auth boundary. This asymmetry comes from the product design
//! and is preserved deliberately.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Extension, Router,
};
use tower_http::cors::CorsLayer;

use unitask_infra::TaskStore;
use unitask_tasks::StatusPolicy;

pub mod config;
pub mod dto;
pub mod errors;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
    /// Transition rule applied by the status endpoint. Permissive by
    /// default; Enforced is opt-in via configuration.
    pub policy: StatusPolicy,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/", get(routes::list_tasks).post(routes::create_task))
        .route("/:id", put(routes::update_task).delete(routes::delete_task))
        .route("/:id/status", put(routes::set_status))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
}
