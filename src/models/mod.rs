//! Data models for the demo endpoints.
//!
//! This module contains the fixed catalogs and the JSON response bodies.

/// Demo catalogs and random selection
pub mod catalog;
/// Response bodies for demo endpoints
pub mod demo;
