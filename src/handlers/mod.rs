//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that builds a JSON response.
/// Greeting and random catalog endpoints
pub mod demo;
/// Liveness probe
pub mod health;
