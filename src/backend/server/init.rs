/**
 * Server Initialization
 *
 * This module builds the Axum application from a configuration.
 *
 * # Initialization Process
 *
 * 1. Open the document store (creating the data directory if needed)
 * 2. Wrap it with the configuration in `AppState`
 * 3. Create and configure the router
 *
 * The document cache starts empty: nothing is read from disk at startup.
 */

use axum::Router;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::open_document_store;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the data directory cannot be created.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing Rubricy backend server");

    let store = open_document_store(&config)?;
    let app_state = AppState::new(store, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
