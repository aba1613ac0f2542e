use std::sync::Arc;

use unitask_auth::TokenSigner;
use unitask_infra::{ensure_bootstrap_admin, PgUserStore};
use unitask_user_api::{build_router, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    unitask_observability::init();

    let cfg = Config::from_env();

    let pool = unitask_infra::connect_lazy(&cfg.database_url)?;
    let store = Arc::new(PgUserStore::new(pool.clone()));

    // Readiness probe, schema, then reserved-admin reconciliation. If the
    // database never comes up we keep serving; store errors surface
    // per-request instead of crash-looping the process.
    if unitask_infra::wait_for_db(&pool, cfg.db_connect_attempts, cfg.db_connect_delay).await {
        store.ensure_schema().await?;
        ensure_bootstrap_admin(store.as_ref(), &cfg.bootstrap_admin).await?;
    }

    let signer = Arc::new(TokenSigner::new(cfg.jwt_secret.as_bytes()));
    let app = build_router(AppState { store, signer });

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("user service listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
