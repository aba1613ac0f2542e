//! API gateway: the single public entry point.
//!
//! Routes requests to internal services by URL prefix, stripping the matched
//! prefix and passing everything else through untouched. No retries, no
//! circuit breaking, no load balancing: one static upstream per prefix, and
//! upstream unavailability surfaces directly to the client.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

pub mod config;
pub mod proxy;

pub use proxy::RouteTarget;

pub struct GatewayState {
    pub client: reqwest::Client,
    pub routes: Vec<RouteTarget>,
}

pub fn build_router(state: Arc<GatewayState>) -> Router {
    Router::new()
        .fallback(proxy::forward)
        .with_state(state)
        .layer(CorsLayer::permissive())
}
