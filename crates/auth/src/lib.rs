//! `unitask-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it knows how
//! to hash passwords, mint/verify bearer tokens, and check roles, and nothing
//! else.

pub mod claims;
pub mod guard;
pub mod password;
pub mod roles;
pub mod token;

pub use claims::{Claims, TOKEN_TTL};
pub use guard::require_role;
pub use roles::Role;
pub use token::{extract_bearer, AuthError, SignError, TokenSigner};
