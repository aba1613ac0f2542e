//! Environment-driven configuration, read once at startup.
//!
//! Defaults exist for local/demo use only and are logged loudly; a production
//! deployment must set every secret explicitly.

use std::time::Duration;

use unitask_infra::BootstrapAdmin;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub db_connect_attempts: u32,
    pub db_connect_delay: Duration,
    pub bootstrap_admin: BootstrapAdmin,
}

impl Config {
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set; using local dev default");
            "postgres://unitask:password@db:5432/task_db".to_string()
        });

        let mut bootstrap_admin = BootstrapAdmin::default();
        if let Ok(nim) = std::env::var("ADMIN_NIM") {
            bootstrap_admin.nim = nim;
        }
        match std::env::var("ADMIN_PASSWORD") {
            Ok(pw) => bootstrap_admin.password = pw,
            Err(_) => tracing::warn!("ADMIN_PASSWORD not set; using insecure dev default"),
        }

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string()),
            database_url,
            jwt_secret,
            db_connect_attempts: env_u64("DB_CONNECT_ATTEMPTS", 10) as u32,
            db_connect_delay: Duration::from_secs(env_u64("DB_CONNECT_DELAY_SECS", 5)),
            bootstrap_admin,
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
