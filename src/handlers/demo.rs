//! Demo HTTP handlers.
//!
//! This module implements the demo endpoints:
//! - GET /v1/hello - Fixed greeting (public)
//! - GET /v1/shapes - Random shape (API key protected)
//! - GET /v1/forms - Random form (API key protected)
//!
//! The protected handlers never see a rejected request; the gate in
//! `middleware::auth` has already stopped it.

use crate::{
    models::{
        catalog::{FORMS, SHAPES},
        demo::{FormResponse, GREETING, HelloResponse, ShapeResponse},
    },
    state::AppState,
};
use axum::{Json, extract::State};

/// Return the fixed greeting.
///
/// # Response (200 OK)
///
/// ```json
/// { "text": "Hello, World!", "status": "Hello, World!" }
/// ```
pub async fn hello() -> Json<HelloResponse> {
    tracing::debug!("text: {GREETING}");
    Json(HelloResponse::greeting())
}

/// Return a random shape.
///
/// # Response (200 OK)
///
/// ```json
/// { "shape": "Triangle", "status": "Triangle (api key protected)" }
/// ```
pub async fn random_shape(State(state): State<AppState>) -> Json<ShapeResponse> {
    let shape = SHAPES.pick(state.random.as_ref());
    tracing::debug!("shape: {shape}");
    Json(ShapeResponse::new(shape))
}

/// Return a random form.
///
/// # Response (200 OK)
///
/// ```json
/// { "form": "Cone", "status": "Cone (api key protected)" }
/// ```
pub async fn random_form(State(state): State<AppState>) -> Json<FormResponse> {
    let form = FORMS.pick(state.random.as_ref());
    tracing::debug!("form: {form}");
    Json(FormResponse::new(form))
}
