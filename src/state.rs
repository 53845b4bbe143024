//! Shared application state.
//!
//! Everything here is immutable after startup and shared across requests
//! through `Arc`, so cloning the state per request is cheap.

use std::sync::Arc;

use crate::{
    config::Config,
    models::catalog::{RandomSource, ThreadRandom},
    services::key_verifier::ApiKeyVerifier,
};

#[derive(Clone)]
pub struct AppState {
    /// Checks keys on protected routes
    pub verifier: Arc<ApiKeyVerifier>,

    /// Picks catalog entries for the demo handlers
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(verifier: ApiKeyVerifier, random: Arc<dyn RandomSource>) -> Self {
        Self {
            verifier: Arc::new(verifier),
            random,
        }
    }

    /// Production state: verifier from configuration, thread-local randomness.
    pub fn from_config(config: &Config) -> Self {
        Self::new(ApiKeyVerifier::from_config(config), Arc::new(ThreadRandom))
    }
}
