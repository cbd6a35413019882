//! Shared Module
//!
//! This module contains types and logic that do not depend on the HTTP
//! server: the document data model, the text-advice engine, configuration
//! and the shared error type. Everything here is free of network I/O and
//! can be used from tests or other front ends directly.

/// Document data structures
pub mod document;

/// Rule-based text-advice engine
pub mod advice;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use document::{Document, DocumentMetadata};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
