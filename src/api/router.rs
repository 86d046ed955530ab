use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{documents, query};
use super::health;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        // Public domain listing
        .route("/domains", get(documents::handle_domains))
        // Authenticated endpoints
        .route("/query", post(query::handle_query))
        .route("/documents", post(documents::handle_upload))
        .route("/stats", get(documents::handle_stats))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
