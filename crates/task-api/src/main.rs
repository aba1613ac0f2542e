use std::sync::Arc;

use unitask_infra::PgTaskStore;
use unitask_task_api::{build_router, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    unitask_observability::init();

    let cfg = Config::from_env();

    let pool = unitask_infra::connect_lazy(&cfg.database_url)?;
    let store = Arc::new(PgTaskStore::new(pool.clone()));

    // Readiness probe then schema. If the database never comes up we keep
    // serving; store errors surface per-request instead of crash-looping.
    if unitask_infra::wait_for_db(&pool, cfg.db_connect_attempts, cfg.db_connect_delay).await {
        store.ensure_schema().await?;
    }

    let app = build_router(AppState {
        store,
        policy: cfg.status_policy,
    });

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("task service listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
