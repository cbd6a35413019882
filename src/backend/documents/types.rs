/**
 * Document Handler Types
 *
 * Request and response bodies for the document endpoints. Every request
 * field is optional; the store fills in defaults.
 */

use serde::{Deserialize, Serialize};
use crate::backend::documents::store::DocumentDraft;
use crate::shared::{Document, DocumentMetadata};

/// Save request
///
/// Omitting `id` generates one from the current time; omitting `title`
/// gives "Untitled Document"; omitting `content` saves an empty document.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SaveDocumentRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<SaveDocumentRequest> for DocumentDraft {
    fn from(request: SaveDocumentRequest) -> Self {
        DocumentDraft {
            id: request.id,
            title: request.title,
            content: request.content,
        }
    }
}

/// Single document response (save and load)
#[derive(Serialize, Deserialize, Debug)]
pub struct DocumentResponse {
    pub success: bool,
    pub document: Document,
}

/// Listing response, most recently updated first
#[derive(Serialize, Deserialize, Debug)]
pub struct DocumentListResponse {
    pub success: bool,
    pub documents: Vec<DocumentMetadata>,
}
