//! Shapes API Server - Main Application Entry Point
//!
//! A small REST API serving demo values. `/v1/hello` is public; `/v1/shapes`
//! and `/v1/forms` return a random catalog entry and require an API key.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Authentication**: single static API key, checked by a route gate
//! - **Format**: JSON responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build shared state (key verifier, random source)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured address

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    if config.api_key.is_empty() {
        tracing::warn!("API_KEY is empty; every protected request will be rejected");
    }

    let state = state::AppState::from_config(&config);
    let app = routes::create_router(state);

    // Bind to network address and start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
