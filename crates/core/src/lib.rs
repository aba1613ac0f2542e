//! `unitask-core` — shared domain types.
//!
//! Deliberately tiny: the services share an error taxonomy and nothing else.

pub mod error;

pub use error::{DomainError, DomainResult};
