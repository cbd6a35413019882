//! Document HTTP Handlers
//!
//! Thin adapters between Axum and [`DocumentStore`]. Saves take the store's
//! write lock; loads and listings share the read lock.

use axum::{
    extract::{Path, State},
    Json,
};

use super::store::DocumentStore;
use super::types::{DocumentListResponse, DocumentResponse, SaveDocumentRequest};
use crate::backend::error::BackendError;
use crate::backend::server::state::SharedDocumentStore;

/// Save a document (POST /api/save-document)
pub async fn save_document(
    State(store): State<SharedDocumentStore>,
    Json(request): Json<SaveDocumentRequest>,
) -> Result<Json<DocumentResponse>, BackendError> {
    let document = {
        let mut store = store.write().await;
        store.save(request.into())?
    };

    Ok(Json(DocumentResponse {
        success: true,
        document,
    }))
}

/// Load a document by id (GET /api/load-document/{id})
pub async fn load_document(
    State(store): State<SharedDocumentStore>,
    Path(id): Path<String>,
) -> Result<Json<DocumentResponse>, BackendError> {
    let document = store.read().await.load(&id)?;

    Ok(Json(DocumentResponse {
        success: true,
        document,
    }))
}

/// List document metadata (GET /api/list-documents)
pub async fn list_documents(
    State(store): State<SharedDocumentStore>,
) -> Result<Json<DocumentListResponse>, BackendError> {
    let store = store.read().await;
    let documents = store.list()?;
    log_cache_gap(&store, documents.len());

    Ok(Json(DocumentListResponse {
        success: true,
        documents,
    }))
}

fn log_cache_gap(store: &DocumentStore, on_disk: usize) {
    let cached = store.cached_len();
    if cached < on_disk {
        tracing::debug!(
            "{} documents on disk, {} saved since startup",
            on_disk,
            cached
        );
    }
}
