use serde::{Deserialize, Serialize};

use unitask_core::DomainError;

/// Coarse-grained permission label.
///
/// Exactly two roles exist and there is no hierarchy: Admin does not
/// implicitly pass a Student-only check (none exist today), and privileged
/// endpoints require exactly `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Student" => Ok(Role::Student),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}
