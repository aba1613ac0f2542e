//! Role guard: the policy layer between a verified identity and a privileged
//! action.

use crate::{AuthError, Claims, Role};

/// Require an exact role. No hierarchy: a check for `Student` would not be
/// satisfied by `Admin` (no such check exists in the current surface; every
/// privileged endpoint requires exactly `Admin`).
pub fn require_role(claims: &Claims, required: Role) -> Result<(), AuthError> {
    if claims.role == required {
        Ok(())
    } else {
        Err(AuthError::Forbidden(required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn claims(role: Role) -> Claims {
        Claims::issue(1, "Test", role, Utc::now())
    }

    #[test]
    fn matching_role_passes() {
        assert!(require_role(&claims(Role::Admin), Role::Admin).is_ok());
    }

    #[test]
    fn mismatched_role_forbidden() {
        assert_eq!(
            require_role(&claims(Role::Student), Role::Admin),
            Err(AuthError::Forbidden(Role::Admin))
        );
    }
}
