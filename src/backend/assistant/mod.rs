//! Assistant Backend Module
//!
//! HTTP surface of the text-advice engine: chat, grammar, style, ideas and
//! export. The logic itself lives in `shared::advice`; this module only
//! adapts it to JSON requests and responses.

/// HTTP handlers
pub mod handlers;

/// Handler request/response types
pub mod types;

pub use handlers::{chat, check_grammar, export_document, generate_ideas, improve_style};
