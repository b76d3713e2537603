//! Router assembly for the chistes HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::openapi::DOCS_PATH;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Jokes
        .route(
            "/chistes",
            get(handlers::jokes::get_joke).post(handlers::jokes::create_joke),
        )
        .route(
            "/chistes/{number}",
            put(handlers::jokes::update_joke).delete(handlers::jokes::delete_joke),
        )
        // Math
        .route("/lcm", get(handlers::math::lcm))
        .route("/increment", get(handlers::math::increment))
        // Docs
        .route(DOCS_PATH, get(handlers::docs::openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
