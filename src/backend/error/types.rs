/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and server
 * setup. Each variant knows its HTTP status and the message sent to the
 * client.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Explicit errors raised while processing a request, carrying their own
 * status code (unknown route, rejected input).
 *
 * ## Store Errors
 *
 * Errors from the document store:
 * - Missing document (404 "Document not found")
 * - Unusable document id (400)
 * - Disk and parse failures (500)
 *
 * ## Shared Errors
 *
 * Errors from the advice engine, most notably an unsupported export format
 * (400 "Unsupported format").
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::documents::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use rubricy::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Document store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Shared error (from the advice engine and shared types)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Store` - 404 for a missing document, 400 for an invalid id,
    ///   500 for I/O and malformed files
    /// - `SharedError` - 400 for unsupported formats
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Store(err) => match err {
                StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                StoreError::InvalidId { .. } => StatusCode::BAD_REQUEST,
                StoreError::Io { .. } | StoreError::Json { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::SharedError(err) => match err {
                SharedError::UnsupportedFormat { .. } => StatusCode::BAD_REQUEST,
            },
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Store(StoreError::InvalidId { .. }) => "Invalid document id".to_string(),
            Self::Store(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }
}
