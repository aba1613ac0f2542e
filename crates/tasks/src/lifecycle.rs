//! Status transition policy.
//!
//! The default contract is permissive: any status can be written over any
//! prior state, and the intended lifecycle lives only in client affordances.
//! The rule is isolated here as a single pluggable check so the stricter
//! variant is selectable and both behaviors are testable.

use unitask_core::DomainError;

use crate::TaskStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Accept any status write, backward transitions included.
    #[default]
    Permissive,

    /// Enforce the intended lifecycle: TODO → ON_PROGRESS → DONE, any
    /// non-DONE state may jump to DONE, DONE is terminal. Writing the
    /// current status again is a no-op and allowed.
    Enforced,
}

impl StatusPolicy {
    /// Parse from configuration; anything other than "enforced" means
    /// permissive.
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case("enforced") {
            StatusPolicy::Enforced
        } else {
            StatusPolicy::Permissive
        }
    }

    pub fn check(&self, from: TaskStatus, to: TaskStatus) -> Result<(), DomainError> {
        match self {
            StatusPolicy::Permissive => Ok(()),
            StatusPolicy::Enforced => {
                let allowed = from == to
                    || matches!(
                        (from, to),
                        (TaskStatus::Todo, TaskStatus::OnProgress)
                            | (TaskStatus::Todo, TaskStatus::Done)
                            | (TaskStatus::OnProgress, TaskStatus::Done)
                    );
                if allowed {
                    Ok(())
                } else {
                    Err(DomainError::validation(format!(
                        "illegal status transition: {from} -> {to}"
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TaskStatus::*;

    #[test]
    fn permissive_accepts_everything() {
        let policy = StatusPolicy::Permissive;
        for from in [Todo, OnProgress, Done] {
            for to in [Todo, OnProgress, Done] {
                assert!(policy.check(from, to).is_ok());
            }
        }
    }

    #[test]
    fn enforced_follows_lifecycle() {
        let policy = StatusPolicy::Enforced;
        assert!(policy.check(Todo, OnProgress).is_ok());
        assert!(policy.check(Todo, Done).is_ok());
        assert!(policy.check(OnProgress, Done).is_ok());
        // Same-state writes are no-ops.
        assert!(policy.check(Done, Done).is_ok());
    }

    #[test]
    fn enforced_blocks_backward_and_out_of_done() {
        let policy = StatusPolicy::Enforced;
        assert!(policy.check(OnProgress, Todo).is_err());
        assert!(policy.check(Done, Todo).is_err());
        assert!(policy.check(Done, OnProgress).is_err());
    }

    #[test]
    fn config_parsing_defaults_to_permissive() {
        assert_eq!(StatusPolicy::from_config("enforced"), StatusPolicy::Enforced);
        assert_eq!(StatusPolicy::from_config("Enforced"), StatusPolicy::Enforced);
        assert_eq!(StatusPolicy::from_config("permissive"), StatusPolicy::Permissive);
        assert_eq!(StatusPolicy::from_config(""), StatusPolicy::Permissive);
    }
}
