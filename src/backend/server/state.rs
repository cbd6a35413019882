/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits used for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The document store, shared behind `Arc<RwLock<>>`
 * - The resolved configuration
 *
 * The advice handlers are stateless and extract nothing.
 *
 * # Example
 *
 * ```rust
 * use rubricy::backend::server::state::SharedDocumentStore;
 * use axum::extract::State;
 *
 * async fn handler(State(store): State<SharedDocumentStore>) {
 *     let documents = store.read().await.list();
 *     // ...
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::backend::documents::store::DocumentStore;
use crate::shared::AppConfig;

/// Document store handle shared by all handlers
pub type SharedDocumentStore = Arc<RwLock<DocumentStore>>;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Document store; saves take the write lock, loads and listings the
    /// read lock.
    pub documents: SharedDocumentStore,

    /// Configuration the server was started with
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: DocumentStore, config: AppConfig) -> Self {
        Self {
            documents: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}

/// Implement FromRef for the document store
///
/// This allows handlers to extract `State<SharedDocumentStore>` directly.
impl FromRef<AppState> for SharedDocumentStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.documents.clone()
    }
}
