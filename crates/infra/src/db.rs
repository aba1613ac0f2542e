//! Connection pool construction and startup readiness probing.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::StoreError;

/// Build a lazy pool: no connection is attempted until first use, so a
/// service can start (degraded) while the database is still coming up.
pub fn connect_lazy(database_url: &str) -> Result<PgPool, StoreError> {
    Ok(PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy(database_url)?)
}

/// Liveness probe with a bounded retry budget, run once before the service
/// starts accepting traffic.
///
/// Returns `true` once `SELECT 1` succeeds. Exhausting the budget returns
/// `false` and the caller is expected to keep serving: subsequent store
/// operations fail per-request instead of crash-looping the process.
pub async fn wait_for_db(pool: &PgPool, attempts: u32, delay: Duration) -> bool {
    for attempt in 1..=attempts {
        match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => {
                tracing::info!(attempt, "database is ready");
                return true;
            }
            Err(e) => {
                tracing::warn!(
                    attempt,
                    attempts,
                    "database not ready ({e}); retrying in {}s",
                    delay.as_secs()
                );
                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
    tracing::error!(attempts, "database never became ready; serving degraded");
    false
}
