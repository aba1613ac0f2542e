//! User/authentication service.
//!
//! Public endpoints: `/register`, `/login`, `/health`. Everything else sits
//! behind the bearer-token middleware; mutations additionally require the
//! Admin role. Paths are as forwarded by the gateway, i.e. after the
//! `/api/users` prefix is stripped.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use tower_http::cors::CorsLayer;

use unitask_auth::TokenSigner;
use unitask_infra::UserStore;

pub mod config;
pub mod dto;
pub mod errors;
pub mod middleware;
pub mod routes;

/// Process-scoped handles, constructed once at startup and passed explicitly
/// into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub signer: Arc<TokenSigner>,
}

/// Build the full HTTP router (used by `main.rs` and the black-box tests).
pub fn build_router(state: AppState) -> Router {
    let auth_state = middleware::AuthState {
        signer: state.signer.clone(),
    };

    let protected = Router::new()
        .route("/", get(routes::list_users).post(routes::create_user))
        .route(
            "/:id",
            put(routes::update_user).delete(routes::delete_user),
        )
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::health))
        .route("/register", post(routes::register))
        .route("/login", post(routes::login))
        .merge(protected)
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
}
