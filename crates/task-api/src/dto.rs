//! Request DTOs for the task service.
//!
//! Deadline fields arrive as the browser sends them: dates as `YYYY-MM-DD`,
//! times as `HH:MM` or `HH:MM:SS`. Times are parsed leniently here rather
//! than relying on chrono's serde format.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use unitask_core::DomainError;
use unitask_tasks::TaskStatus;

fn default_category() -> String {
    "General".to_string()
}

/// Body for task creation. There is intentionally no status field: any
/// status supplied by the caller is ignored and new tasks start as TODO.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub deadline_date: Option<NaiveDate>,
    #[serde(default)]
    pub deadline_time: Option<String>,
}

/// Body for a full-field task edit. Does not carry status.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub deadline_date: Option<NaiveDate>,
    #[serde(default)]
    pub deadline_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: TaskStatus,
}

/// Parse an optional `HH:MM[:SS]` time; empty strings count as absent.
pub fn parse_deadline_time(value: Option<&str>) -> Result<Option<NaiveTime>, DomainError> {
    let Some(raw) = value else { return Ok(None) };
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(Some)
        .map_err(|_| DomainError::validation(format!("invalid deadline_time: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_time_accepts_browser_formats() {
        assert_eq!(
            parse_deadline_time(Some("10:00")).unwrap(),
            Some("10:00:00".parse().unwrap())
        );
        assert_eq!(
            parse_deadline_time(Some("23:59:59")).unwrap(),
            Some("23:59:59".parse().unwrap())
        );
        assert_eq!(parse_deadline_time(Some("")).unwrap(), None);
        assert_eq!(parse_deadline_time(None).unwrap(), None);
        assert!(parse_deadline_time(Some("25:00")).is_err());
    }
}
