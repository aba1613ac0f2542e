//! `unitask-infra` — storage layer.
//!
//! Store traits with two implementations each: Postgres for deployment and
//! in-memory for tests/dev. Also owns database readiness probing and the
//! reserved-admin reconciliation that runs on every user-service startup.

pub mod bootstrap;
pub mod db;
pub mod error;
pub mod task_store;
pub mod user_store;

pub use bootstrap::{ensure_bootstrap_admin, BootstrapAdmin, BootstrapError};
pub use db::{connect_lazy, wait_for_db};
pub use error::StoreError;
pub use task_store::{InMemoryTaskStore, PgTaskStore, TaskStore};
pub use user_store::{InMemoryUserStore, PgUserStore, UserStore};
