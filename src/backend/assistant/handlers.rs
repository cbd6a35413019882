//! Assistant HTTP Handlers
//!
//! These handlers hold no state; each one forwards its body to the matching
//! function in `shared::advice` and wraps the result.

use axum::Json;

use super::types::{
    ChatRequest, ChatResponse, ExportRequest, ExportResponse, GrammarResponse, IdeasRequest,
    IdeasResponse, StyleResponse, TextRequest,
};
use crate::backend::error::BackendError;
use crate::shared::advice;

/// Reply to a chat message (POST /api/chat)
pub async fn chat(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    tracing::debug!("Chat message of {} chars", request.message().len());
    Json(ChatResponse {
        success: true,
        response: advice::chat_reply(request.message(), request.context()),
    })
}

/// Check grammar (POST /api/check-grammar)
pub async fn check_grammar(Json(request): Json<TextRequest>) -> Json<GrammarResponse> {
    let report = advice::check_grammar(request.text());
    Json(GrammarResponse {
        success: true,
        issues: report.issues,
        suggestions: report.suggestions,
    })
}

/// Suggest style improvements (POST /api/improve-style)
pub async fn improve_style(Json(request): Json<TextRequest>) -> Json<StyleResponse> {
    let report = advice::suggest_style(request.text());
    Json(StyleResponse {
        success: true,
        suggestions: report.suggestions,
        improved_text: report.improved_text,
    })
}

/// Generate writing ideas (POST /api/generate-ideas)
pub async fn generate_ideas(Json(request): Json<IdeasRequest>) -> Json<IdeasResponse> {
    Json(IdeasResponse {
        success: true,
        ideas: advice::generate_ideas(request.context(), request.topic()),
    })
}

/// Export content (POST /api/export-document)
///
/// Unknown formats answer 400 with "Unsupported format".
pub async fn export_document(
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, BackendError> {
    let exported = advice::export_document(request.content(), request.format())?;
    tracing::debug!("Exported {} chars as {}", request.content().len(), exported.format);

    Ok(Json(ExportResponse {
        success: true,
        format: exported.format,
        content: exported.content,
    }))
}
