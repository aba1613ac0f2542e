//! Environment-driven configuration, read once at startup.

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub user_service_url: String,
    pub task_service_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            user_service_url: std::env::var("USER_SERVICE_URL")
                .unwrap_or_else(|_| "http://user-service:3001".to_string()),
            task_service_url: std::env::var("TASK_SERVICE_URL")
                .unwrap_or_else(|_| "http://task-service:3002".to_string()),
        }
    }
}
