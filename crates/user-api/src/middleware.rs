use std::sync::Arc;

use axum::{
    extract::State,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use unitask_auth::{extract_bearer, TokenSigner};

use crate::errors;

#[derive(Clone)]
pub struct AuthState {
    pub signer: Arc<TokenSigner>,
}

/// Verify the bearer token and attach the decoded claims to the request.
///
/// Missing/malformed headers and invalid/expired tokens both reject with
/// 401; the distinction is not exposed to callers.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        extract_bearer(header).map(str::to_owned)
    };

    match token.and_then(|t| state.signer.verify(&t)) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(e) => errors::auth_error_to_response(&e),
    }
}
