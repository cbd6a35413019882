//! Shared Error Types
//!
//! This module defines error types produced by the shared layer. They are
//! independent of HTTP and are mapped to status codes by the backend.
//!
//! # Error Categories
//!
//! - `UnsupportedFormat` - Export requested in a format we do not produce
//!
//! # Usage
//!
//! ```rust
//! use rubricy::shared::error::SharedError;
//!
//! let error = SharedError::unsupported_format("pdf");
//! assert_eq!(error.to_string(), "Unsupported format");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Export format outside of `txt`, `html` and `markdown`
    ///
    /// The display text is the exact message sent to clients.
    #[error("Unsupported format")]
    UnsupportedFormat {
        /// The format string the caller asked for
        format: String,
    },
}

impl SharedError {
    /// Create a new unsupported format error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }
}
