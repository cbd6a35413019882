/**
 * Document Types
 *
 * This module defines the persisted document record and its metadata
 * projection. These are the exact shapes written to disk and returned by
 * the document endpoints.
 *
 * # Timestamps
 *
 * Timestamps are ISO-8601 local times without offset
 * (`2024-01-02T09:30:00.000000`) and are kept as strings. Listing orders by
 * plain string comparison, which matches chronological order for values
 * produced by [`format_timestamp`].
 */

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Title given to documents saved without one
pub const UNTITLED_TITLE: &str = "Untitled Document";

/// Format of generated document ids (`YYYYMMDDHHMMSS`)
pub const DOCUMENT_ID_FORMAT: &str = "%Y%m%d%H%M%S";

/// Format of `created_at` / `updated_at`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A saved piece of writing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Unique key; also the file stem on disk
    pub id: String,
    /// Document title
    pub title: String,
    /// Full document text
    pub content: String,
    /// Set on every save, including overwrites
    pub created_at: String,
    /// Set on every save
    pub updated_at: String,
}

/// Document metadata
///
/// Listing projection of a [`Document`] without its content. Fields missing
/// from a stored file come back as `None` (serialized as `null`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub id: Option<String>,
    pub title: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Document {
    /// Build a document stamped with `now` for both timestamps
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        now: &NaiveDateTime,
    ) -> Self {
        let stamp = format_timestamp(now);
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }

    /// Project the listing metadata
    pub fn metadata(&self) -> DocumentMetadata {
        DocumentMetadata {
            id: Some(self.id.clone()),
            title: Some(self.title.clone()),
            created_at: Some(self.created_at.clone()),
            updated_at: Some(self.updated_at.clone()),
        }
    }
}

impl DocumentMetadata {
    /// Sort key used by listings; absent timestamps sort last
    pub fn updated_key(&self) -> &str {
        self.updated_at.as_deref().unwrap_or("")
    }
}

/// Generate a document id from the given time (`YYYYMMDDHHMMSS`)
///
/// Two saves within the same second produce the same id.
pub fn generate_document_id(now: &NaiveDateTime) -> String {
    now.format(DOCUMENT_ID_FORMAT).to_string()
}

/// Render a timestamp in the persisted format
pub fn format_timestamp(now: &NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, the clock used for ids and timestamps
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Order metadata most recently updated first
///
/// Comparison is lexicographic on the raw `updated_at` strings. The sort is
/// stable, so equal keys keep their input order.
pub fn sort_most_recent_first(documents: &mut [DocumentMetadata]) {
    documents.sort_by(|a, b| b.updated_key().cmp(a.updated_key()));
}
