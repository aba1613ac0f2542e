//! `unitask-users` — user domain model.

pub mod user;

pub use user::{validate_registration, NewUser, User, UserRecord, UserUpdate};
