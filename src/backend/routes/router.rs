/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (`/api/...`)
 * 2. Frontend: `/` serves `index.html`, `/static/...` serves assets
 * 3. Fallback handler (JSON 404)
 *
 * Every route sits behind a permissive CORS layer so a frontend served
 * from another origin can call the API, and a tracing layer that logs each
 * request.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the document store
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let static_dir = app_state.config.static_dir.clone();

    // Add API routes
    let router = configure_api_routes(Router::new());

    // Frontend entry point and assets
    let router = router
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir));

    // Fallback handler for 404
    let router = router.fallback(|| async {
        BackendError::handler(StatusCode::NOT_FOUND, "Not found")
    });

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
