/**
 * API Routes
 *
 * This module registers every `/api` endpoint.
 *
 * # Routes
 *
 * ## Assistant
 * - `POST /api/chat` - Chat reply
 * - `POST /api/check-grammar` - Grammar issues and suggestions
 * - `POST /api/improve-style` - Style suggestions
 * - `POST /api/generate-ideas` - Writing prompts
 * - `POST /api/export-document` - Export as txt, html or markdown
 *
 * ## Documents
 * - `POST /api/save-document` - Save (create or overwrite)
 * - `GET /api/load-document/{id}` - Load one document
 * - `GET /api/list-documents` - Metadata of all documents
 */

use axum::Router;
use axum::routing::{get, post};
use crate::backend::assistant::{chat, check_grammar, export_document, generate_ideas, improve_style};
use crate::backend::documents::{list_documents, load_document, save_document};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Assistant endpoints
        .route("/api/chat", post(chat))
        .route("/api/check-grammar", post(check_grammar))
        .route("/api/improve-style", post(improve_style))
        .route("/api/generate-ideas", post(generate_ideas))
        .route("/api/export-document", post(export_document))
        // Document endpoints
        .route("/api/save-document", post(save_document))
        .route("/api/load-document/{id}", get(load_document))
        .route("/api/list-documents", get(list_documents))
}
