//! HTTP router assembly.
//!
//! Public routes and protected routes are built as separate groups; the
//! API key gate is attached to the protected group only.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware, state::AppState};

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    // Routes that require a valid API key
    let protected_routes = Router::new()
        .route("/shapes", get(handlers::demo::random_shape))
        .route("/forms", get(handlers::demo::random_form))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::api_key_gate,
        ));

    let v1 = Router::new()
        .route("/hello", get(handlers::demo::hello))
        .merge(protected_routes);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/v1", v1)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
