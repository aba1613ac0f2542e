use std::sync::Arc;

use unitask_gateway::{build_router, config::Config, GatewayState, RouteTarget};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    unitask_observability::init();

    let cfg = Config::from_env();

    let state = Arc::new(GatewayState {
        client: reqwest::Client::new(),
        routes: vec![
            RouteTarget::new("/api/users", cfg.user_service_url),
            RouteTarget::new("/api/tasks", cfg.task_service_url),
        ],
    });

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("gateway listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
