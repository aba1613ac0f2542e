//! Environment-driven configuration, read once at startup.

use std::time::Duration;

use unitask_tasks::StatusPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub db_connect_attempts: u32,
    pub db_connect_delay: Duration,
    pub status_policy: StatusPolicy,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set; using local dev default");
            "postgres://unitask:password@db:5432/task_db".to_string()
        });

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3002".to_string()),
            database_url,
            db_connect_attempts: env_u64("DB_CONNECT_ATTEMPTS", 10) as u32,
            db_connect_delay: Duration::from_secs(env_u64("DB_CONNECT_DELAY_SECS", 5)),
            status_policy: StatusPolicy::from_config(
                &std::env::var("TASK_STATUS_POLICY").unwrap_or_default(),
            ),
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
