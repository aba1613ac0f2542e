use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::Role;

/// How long a minted token stays valid. Expiry is the only termination
/// mechanism: there is no server-side revocation.
pub const TOKEN_TTL: Duration = Duration::hours(1);

/// Decoded payload of a verified token.
///
/// Timestamps serialize as unix seconds (`iat`/`exp`) so `jsonwebtoken`'s
/// built-in expiry validation applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: store-assigned user id.
    pub sub: i64,

    /// Display name carried for the client's benefit.
    pub name: String,

    /// Role granted at issuance. A later role edit does not invalidate
    /// previously minted tokens.
    pub role: Role,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub iat: DateTime<Utc>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub exp: DateTime<Utc>,
}

impl Claims {
    /// Claims for a fresh token minted `now`, expiring after [`TOKEN_TTL`].
    pub fn issue(sub: i64, name: impl Into<String>, role: Role, now: DateTime<Utc>) -> Self {
        Self {
            sub,
            name: name.into(),
            role,
            iat: now,
            exp: now + TOKEN_TTL,
        }
    }
}
