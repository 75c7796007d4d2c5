//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Forecasting
        .route(
            "/hospitals/{hospital_id}/stock/{blood_group}/forecast",
            get(handlers::stock_forecast),
        )
        .route(
            "/hospitals/{hospital_id}/stock/{blood_group}/outlook",
            get(handlers::stock_outlook),
        )
        .route(
            "/hospitals/{hospital_id}/beds/forecast",
            get(handlers::bed_forecast),
        )
        .route("/forecast", post(handlers::inline_forecast))
        // Proximity
        .route("/hospitals/nearest", get(handlers::nearest_hospitals))
        .route("/donors/match", post(handlers::match_donors))
        .route("/proximity/rank", post(handlers::rank_candidates))
        // Platform stats
        .route("/stats", get(handlers::platform_stats));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Inline candidate lists can get large during drives.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn crate::db::FullRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
