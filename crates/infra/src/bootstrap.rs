//! Reserved-admin reconciliation.
//!
//! On every user-service startup, one reserved admin identity is created if
//! absent and force-reset if present: role back to Admin, password back to a
//! fresh hash of the configured password. This makes the account recoverable
//! by restart; any manual change to its password or role is overwritten the
//! next time the service starts.

use thiserror::Error;

use unitask_auth::{password, Role};
use unitask_users::{NewUser, UserUpdate};

use crate::{StoreError, UserStore};

/// Identity of the reserved admin account.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub name: String,
    pub nim: String,
    pub password: String,
}

impl Default for BootstrapAdmin {
    fn default() -> Self {
        Self {
            name: "Administrator".to_string(),
            nim: "1301190001".to_string(),
            password: "admin123".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Hash(#[from] password::HashError),
}

/// Run the reconciliation. Call unconditionally on every startup.
pub async fn ensure_bootstrap_admin(
    store: &dyn UserStore,
    admin: &BootstrapAdmin,
) -> Result<(), BootstrapError> {
    let hash = password::hash_password(&admin.password)?;

    match store.find_by_nim(&admin.nim).await? {
        Some(existing) => {
            store
                .update(
                    existing.id,
                    UserUpdate {
                        role: Some(Role::Admin),
                        password_hash: Some(hash),
                        ..Default::default()
                    },
                )
                .await?;
            tracing::info!(nim = %admin.nim, "reserved admin reconciled (role and password reset)");
        }
        None => {
            store
                .create(NewUser {
                    name: admin.name.clone(),
                    nim: admin.nim.clone(),
                    role: Role::Admin,
                    password_hash: hash,
                })
                .await?;
            tracing::info!(nim = %admin.nim, "reserved admin created");
        }
    }

    Ok(())
}
