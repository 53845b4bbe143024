//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit a request
//! (reject callers without a valid API key).

/// API key gate middleware
pub mod auth;
