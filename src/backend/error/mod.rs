//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`; the two application-level
//! failures clients are expected to handle are:
//!
//! - missing document → 404 `{"success": false, "error": "Document not found"}`
//! - unknown export format → 400 `{"success": false, "error": "Unsupported format"}`
//!
//! Anything else (disk errors, corrupt files) renders as a 500 with the
//! underlying error text.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
