use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use unitask_core::DomainError;

/// Task status.
///
/// The intended lifecycle is TODO → ON_PROGRESS → DONE (any non-DONE state
/// may jump straight to DONE); whether the store enforces that is decided by
/// [`crate::StatusPolicy`], not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "TODO")]
    Todo,
    #[serde(rename = "ON_PROGRESS")]
    OnProgress,
    #[serde(rename = "DONE")]
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::OnProgress => "ON_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }
}

impl core::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(TaskStatus::Todo),
            "ON_PROGRESS" => Ok(TaskStatus::OnProgress),
            "DONE" => Ok(TaskStatus::Done),
            other => Err(DomainError::validation(format!("unknown status: {other}"))),
        }
    }
}

/// A task row. Tasks are unowned in this design: there is no user reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub deadline_date: Option<NaiveDate>,
    pub deadline_time: Option<NaiveTime>,
    pub status: TaskStatus,
}

/// Fields for creating a task. There is deliberately no status field: new
/// tasks always start as TODO regardless of caller input.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: String,
    pub deadline_date: Option<NaiveDate>,
    pub deadline_time: Option<NaiveTime>,
}

/// Full-field replace for a task edit. Does not touch status.
#[derive(Debug, Clone)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub category: String,
    pub deadline_date: Option<NaiveDate>,
    pub deadline_time: Option<NaiveTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for s in [TaskStatus::Todo, TaskStatus::OnProgress, TaskStatus::Done] {
            assert_eq!(s.as_str().parse::<TaskStatus>().unwrap(), s);
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert!("IN_PROGRESS".parse::<TaskStatus>().is_err());
        assert!("done".parse::<TaskStatus>().is_err());
    }
}
