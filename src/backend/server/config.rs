/**
 * Server Configuration
 *
 * This module resolves the server configuration and prepares the resources
 * it points at, chiefly the document directory.
 *
 * # Configuration Sources
 *
 * See [`AppConfig`] for the layering of defaults, the optional TOML file
 * and environment variables.
 *
 * # Error Handling
 *
 * Unlike optional integrations, the document directory is required: if it
 * cannot be created the server does not start.
 */

use crate::backend::documents::store::{DocumentStore, StoreError};
use crate::shared::{AppConfig, ConfigError};

/// Load and validate the configuration from the process environment
///
/// # Errors
///
/// Returns `ConfigError` for an unreadable or invalid config file or an
/// invalid `SERVER_PORT`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    tracing::info!(
        "Configuration loaded: data_dir={}, static_dir={}, bind={}",
        config.data_dir.display(),
        config.static_dir.display(),
        config.bind_address()
    );
    Ok(config)
}

/// Open the document store at the configured data directory
///
/// The directory is created when absent.
pub fn open_document_store(config: &AppConfig) -> Result<DocumentStore, StoreError> {
    DocumentStore::open(&config.data_dir).inspect_err(|e| {
        tracing::error!("Failed to prepare data directory: {}", e);
    })
}
