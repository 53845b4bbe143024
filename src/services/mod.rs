//! Business logic services.
//!
//! Services contain the decisions separated from HTTP handlers and middleware.

pub mod key_verifier;
