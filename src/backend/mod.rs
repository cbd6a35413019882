//! Backend Module
//!
//! This module contains all server-side code: the Axum router, the document
//! store and the HTTP adapters around the advice engine. It is only compiled
//! when the `ssr` feature is enabled (the default).
//!
//! # Architecture
//!
//! - **`server`** - App state, configuration loading, app creation
//! - **`routes`** - Router assembly
//! - **`documents`** - Document store and its handlers
//! - **`assistant`** - Chat, grammar, style, ideas and export handlers
//! - **`error`** - Backend error type and HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - rubricy-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── documents/      - Document persistence
//! ├── assistant/      - Advice endpoints
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` carries the document store as `Arc<RwLock<DocumentStore>>`
//! plus the resolved configuration. The advice handlers need no state.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` renders as
//! `{"success": false, "error": ...}` with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Document persistence
pub mod documents;

/// Advice endpoints
pub mod assistant;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use documents::{DocumentStore, StoreError};
pub use error::BackendError;
