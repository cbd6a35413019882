//! Rubricy - Writing Assistant Backend
//!
//! Rubricy is the backend for a browser-based writing assistant. It answers
//! chat messages, flags grammar and style problems, proposes writing ideas,
//! and keeps the user's documents as flat JSON files on disk.
//!
//! # Overview
//!
//! This library provides:
//! - A rule-based text-advice engine (chat replies, grammar checks, style
//!   hints, idea prompts, exports)
//! - A document store that mirrors saved documents between an in-memory
//!   cache and one JSON file per document
//! - An Axum HTTP server exposing both under `/api`
//!
//! # Module Structure
//!
//! - **`shared`** - Types and pure logic with no I/O
//!   - Document and metadata structures
//!   - Text-advice engine
//!   - Configuration and error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router, handlers and application state
//!   - Document persistence
//!   - HTTP error rendering
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the
//!   `rubricy-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use rubricy::backend::server::init::create_app;
//! use rubricy::shared::AppConfig;
//!
//! # async fn example() {
//! let app = create_app(AppConfig::default()).await.unwrap();
//! // Use app with axum::serve
//! # }
//! ```
//!
//! The advice engine can be used without the server:
//!
//! ```rust
//! use rubricy::shared::advice;
//!
//! let report = advice::check_grammar("a  b");
//! assert_eq!(report.issues[0].position, 1);
//! ```

/// Shared types and pure text logic
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
