//! HTTP API server
//!
//! This module provides the REST endpoints that turn mission requests into
//! downloadable CSV and KML files.

pub mod error;
pub mod messages;
pub mod rest;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Create the server router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(rest::health))
        // Service info
        .route("/api/info", get(rest::service_info))
        // Mission generation
        .route("/api/generate", post(rest::generate_csv))
        .route("/api/generate_csv", post(rest::generate_csv))
        .route("/api/generate_kml", post(rest::generate_kml))
        // Single projection
        .route("/api/generate_point", get(rest::generate_point))
        // Encoder status
        .route("/api/generate_csv_status", get(rest::csv_status))
        .route("/api/generate_kml_status", get(rest::kml_status))
        // CORS for browser front ends
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
