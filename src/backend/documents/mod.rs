//! Documents Backend Module
//!
//! Server-side document persistence: save, load and list over a directory
//! of JSON files, plus the HTTP handlers for them.
//!
//! # Architecture
//!
//! - **`store`** - `DocumentStore`, one `<id>.json` file per document
//! - **`cache`** - `DocumentCache`, documents saved during this run
//! - **`handlers`** - Axum handlers for the `/api/*-document(s)` routes
//! - **`types`** - Request and response bodies
//!
//! # Example
//!
//! ```rust,no_run
//! use rubricy::backend::documents::{DocumentDraft, DocumentStore};
//!
//! # fn example() -> Result<(), rubricy::backend::documents::StoreError> {
//! let mut store = DocumentStore::open("data")?;
//! let saved = store.save(DocumentDraft {
//!     title: Some("Draft".to_string()),
//!     ..Default::default()
//! })?;
//! let loaded = store.load(&saved.id)?;
//! assert_eq!(saved, loaded);
//! # Ok(())
//! # }
//! ```

/// File-backed document store
pub mod store;

/// Save-populated document cache
pub mod cache;

/// HTTP handlers
pub mod handlers;

/// Handler request/response types
pub mod types;

pub use store::{DocumentDraft, DocumentStore, StoreError};
pub use cache::DocumentCache;
pub use handlers::{list_documents, load_document, save_document};
