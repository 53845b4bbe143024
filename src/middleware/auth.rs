//! API key gate middleware.
//!
//! This middleware runs in front of every protected route to:
//! 1. Find the key the caller supplied
//! 2. Verify it against the configured key
//! 3. Reject the request with HTTP 400 when verification fails

use crate::{
    error::AppError,
    services::key_verifier::GateDecision,
    state::AppState,
};
use axum::{
    extract::{Query, Request, State},
    http::{HeaderMap, Uri, header},
    middleware::Next,
    response::Response,
};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api_key";

/// Find the key a caller supplied.
///
/// Sources are tried in order and the first non-empty value wins:
///
/// 1. `X-API-Key: <key>`
/// 2. `Authorization: Bearer <key>`
/// 3. `?api_key=<key>`
///
/// Header values that are not visible ASCII are skipped. When the query
/// string repeats `api_key`, the first occurrence is the supplied key.
pub fn supplied_key(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let from_header = headers
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|key| !key.is_empty());

    let from_bearer = || {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|key| !key.is_empty())
    };

    if let Some(key) = from_header.or_else(from_bearer) {
        return Some(key.to_string());
    }

    // Read as raw pairs so a repeated parameter is not a parse failure.
    Query::<Vec<(String, String)>>::try_from_uri(uri)
        .ok()
        .and_then(|Query(pairs)| {
            pairs
                .into_iter()
                .find_map(|(name, value)| (name == API_KEY_PARAM).then_some(value))
        })
        .filter(|key| !key.is_empty())
}

/// API key gate middleware function.
///
/// # Flow
///
/// 1. Extract the supplied key (see [`supplied_key`])
/// 2. Verify it with the shared `ApiKeyVerifier`
/// 3. `Reject` → return 400 with the verifier status as the message
/// 4. `Allow` → call the next handler with the request unchanged
///
/// # Returns
///
/// - `Ok(Response)` from the next handler when the key is valid
/// - `Err(AppError::InvalidApiKey)` when it is missing or wrong (returns 400)
pub async fn api_key_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = supplied_key(request.headers(), request.uri());
    let verification = state.verifier.verify(key.as_deref());

    match verification.decision() {
        GateDecision::Reject(status) => {
            tracing::debug!("api key validation failed: {} - error", verification.status());
            Err(AppError::InvalidApiKey(status))
        }
        GateDecision::Allow => {
            tracing::debug!("api key is valid");
            Ok(next.run(request).await)
        }
    }
}
