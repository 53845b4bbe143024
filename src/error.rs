//! Error types and HTTP error response handling.
//!
//! This module defines the application error and how it is converted
//! into an HTTP response with the matching status code and JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::key_verifier::KeyStatus;

/// Application-wide error type.
///
/// The only request-level failure is a rejected API key on a protected
/// route. Its display text is the verifier status string.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// API key is missing or does not match the configured key.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidApiKey(KeyStatus),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "invalid_api_key",
///     "message": "missing key"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidApiKey` → 400 Bad Request
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AppError::InvalidApiKey(_) => (StatusCode::BAD_REQUEST, "invalid_api_key"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
