use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::{Claims, Role};

/// Auth failure as surfaced at the request boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization header absent or not a bearer scheme.
    #[error("missing or malformed authorization header")]
    Unauthenticated,

    /// Signature mismatch, expired token, or undecodable payload. These are
    /// deliberately indistinguishable to the caller.
    #[error("invalid or expired token")]
    InvalidToken,

    /// Verified identity lacks the required role.
    #[error("requires {0} role")]
    Forbidden(Role),
}

#[derive(Debug, Error)]
#[error("token signing failed: {0}")]
pub struct SignError(#[from] jsonwebtoken::errors::Error);

/// HS256 token issuer/verifier.
///
/// The signing key is process-wide configuration loaded once at startup and
/// passed in explicitly; there is no ambient key state.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens are valid strictly until `exp`, no grace window.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Mint a signed token for a verified identity, expiring one hour from now.
    pub fn issue(&self, sub: i64, name: &str, role: Role) -> Result<String, SignError> {
        let claims = Claims::issue(sub, name, role, Utc::now());
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verify a bearer token. Stateless: no session store, no revocation
    /// check; a compromised token stays valid until natural expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token rejected: {e}");
                AuthError::InvalidToken
            })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let token = header
        .ok_or(AuthError::Unauthenticated)?
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Unauthenticated)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::Unauthenticated);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn issue_then_verify_round_trips_claims() {
        let signer = TokenSigner::new(b"test-secret");
        let token = signer.issue(42, "Alice", Role::Admin).unwrap();

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, Duration::hours(1));
    }

    #[test]
    fn wrong_key_rejected() {
        let signer = TokenSigner::new(b"test-secret");
        let other = TokenSigner::new(b"another-secret");
        let token = signer.issue(1, "Bob", Role::Student).unwrap();

        assert_eq!(other.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn tampered_token_rejected() {
        let signer = TokenSigner::new(b"test-secret");
        let mut token = signer.issue(1, "Bob", Role::Student).unwrap();
        token.push('x');

        assert_eq!(signer.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn expired_token_rejected() {
        let signer = TokenSigner::new(b"test-secret");

        // Mint a token whose window closed two hours ago.
        let past = Utc::now() - Duration::hours(3);
        let claims = Claims::issue(1, "Bob", Role::Student, past);
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(signer.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn bearer_extraction() {
        assert_eq!(extract_bearer(Some("Bearer abc")), Ok("abc"));
        assert_eq!(extract_bearer(Some("Bearer  abc ")), Ok("abc"));
        assert_eq!(
            extract_bearer(Some("Basic abc")),
            Err(AuthError::Unauthenticated)
        );
        assert_eq!(extract_bearer(Some("Bearer ")), Err(AuthError::Unauthenticated));
        assert_eq!(extract_bearer(None), Err(AuthError::Unauthenticated));
    }
}
