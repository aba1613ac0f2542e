//! Prefix-based request forwarding.
//!
//! A request path either matches exactly one configured prefix or it does
//! not match at all. On a match the prefix is removed and the remainder
//! (plus the original query string, verbatim) is appended to the upstream
//! base URL. Everything else about the request rides along unchanged.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::header::{CONNECTION, CONTENT_LENGTH, HOST, TRANSFER_ENCODING};
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::GatewayState;

/// One routing rule: requests under `prefix` go to `upstream`.
#[derive(Debug, Clone)]
pub struct RouteTarget {
    pub prefix: String,
    pub upstream: String,
}

impl RouteTarget {
    pub fn new(prefix: impl Into<String>, upstream: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            upstream: upstream.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Strips `prefix` from `path`, returning the upstream-relative path.
///
/// The prefix matches on segment boundaries only: `/api/users` captures
/// `/api/users` and `/api/users/7` but not `/api/userspace`. A bare prefix
/// match forwards as `/`.
pub fn rewrite_path(prefix: &str, path: &str) -> Option<String> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some("/".to_string())
    } else if rest.starts_with('/') {
        Some(rest.to_string())
    } else {
        None
    }
}

pub async fn forward(State(state): State<Arc<GatewayState>>, req: Request) -> Response {
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    let Some((route, rewritten)) = state.routes.iter().find_map(|route| {
        rewrite_path(&route.prefix, &path).map(|rest| (route, rest))
    }) else {
        return json_error(StatusCode::NOT_FOUND, "unknown_route", "no service for this path");
    };

    let mut target = format!("{}{}", route.upstream, rewritten);
    if let Some(q) = &query {
        target.push('?');
        target.push_str(q);
    }

    let (parts, body) = req.into_parts();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = %err, "failed to read request body");
            return json_error(StatusCode::BAD_REQUEST, "bad_request", "unreadable request body");
        }
    };

    let mut upstream_req = state.client.request(parts.method.clone(), &target);
    for (name, value) in parts.headers.iter() {
        // reqwest sets Host and Content-Length itself from the target and body.
        if name != HOST && name != CONTENT_LENGTH {
            upstream_req = upstream_req.header(name, value);
        }
    }

    let upstream_res = match upstream_req.body(body).send().await {
        Ok(res) => res,
        Err(err) => {
            tracing::warn!(target = %target, error = %err, "upstream unreachable");
            return json_error(StatusCode::BAD_GATEWAY, "bad_gateway", "upstream service unavailable");
        }
    };

    let status = upstream_res.status();
    let headers = upstream_res.headers().clone();
    let bytes = match upstream_res.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(target = %target, error = %err, "upstream body read failed");
            return json_error(StatusCode::BAD_GATEWAY, "bad_gateway", "upstream service unavailable");
        }
    };

    let mut out = Response::new(Body::from(bytes));
    *out.status_mut() = status;
    for (name, value) in headers.iter() {
        if !is_hop_header(name) {
            out.headers_mut().append(name.clone(), value.clone());
        }
    }
    out
}

fn is_hop_header(name: &HeaderName) -> bool {
    name == CONNECTION || name == TRANSFER_ENCODING || name == CONTENT_LENGTH
}

fn json_error(status: StatusCode, code: &str, message: &str) -> Response {
    (status, Json(json!({ "error": code, "message": message }))).into_response()
}
