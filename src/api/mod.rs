//! API routes
//!
//! # Structure
//!
//! - [`home`] - public liveness route
//! - [`drinks`] - drinks catalog (public summary, gated detail and mutations)

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod drinks;
pub mod home;

/// Build a router with all routes registered (no global middleware).
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        // Public liveness route
        .merge(home::router())
        // Drinks API - per-route scope gates applied inside
        .merge(drinks::router(state.clone()))
}

/// Build the fully configured application.
///
/// Used by both the HTTP server and in-process test calls.
pub fn build_app(state: ServerState) -> Router {
    build_router(&state)
        // CORS - the catalog is consumed from browser frontends
        .layer(CorsLayer::permissive())
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
