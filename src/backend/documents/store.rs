/**
 * Document Store
 *
 * This module owns the document set. Every document lives in its own file,
 * `<data_dir>/<id>.json`, written as pretty-printed JSON. Saves also go into
 * an in-memory [`DocumentCache`] that lives as long as the store.
 *
 * # Read Paths
 *
 * - `load` always reads the file, never the cache.
 * - `list` scans the directory, projects every `*.json` file to
 *   [`DocumentMetadata`] and sorts by `updated_at`, newest first.
 *
 * # Failure Semantics
 *
 * There is no per-file isolation in listings: one unreadable or malformed
 * file fails the whole call. Disk errors are returned as-is, nothing is
 * retried.
 */

use crate::backend::documents::cache::DocumentCache;
use crate::shared::document::{self, Document, DocumentMetadata, UNTITLED_TITLE};
use chrono::NaiveDateTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DOCUMENT_EXTENSION: &str = ".json";

/// Errors raised by [`DocumentStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No file exists for the requested id
    #[error("Document not found")]
    NotFound { id: String },

    /// The id cannot be used as a file name inside the data directory
    #[error("Invalid document id '{id}'")]
    InvalidId { id: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A document file exists but is not valid document JSON
    #[error("Malformed document file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fields accepted by [`DocumentStore::save`]; all optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// File-backed document store with a save-populated cache
#[derive(Debug)]
pub struct DocumentStore {
    data_dir: PathBuf,
    cache: DocumentCache,
}

impl DocumentStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|source| StoreError::Io {
            path: data_dir.clone(),
            source,
        })?;
        tracing::info!("Document store opened at {}", data_dir.display());
        Ok(Self {
            data_dir,
            cache: DocumentCache::new(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Documents saved during this process lifetime
    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Cached copy of a document saved since startup
    pub fn cached(&self, id: &str) -> Option<&Document> {
        self.cache.get(id)
    }

    /// Number of distinct documents saved since startup
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Save a draft using the current local time
    pub fn save(&mut self, draft: DocumentDraft) -> Result<Document, StoreError> {
        self.save_at(draft, &document::local_now())
    }

    /// Save a draft stamped with `now`
    ///
    /// A missing or empty id is generated from `now` (`YYYYMMDDHHMMSS`). Both
    /// timestamps are set to `now`, so overwriting an existing id also
    /// resets its `created_at`.
    pub fn save_at(
        &mut self,
        draft: DocumentDraft,
        now: &NaiveDateTime,
    ) -> Result<Document, StoreError> {
        let id = draft
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| document::generate_document_id(now));
        if !is_safe_id(&id) {
            return Err(StoreError::InvalidId { id });
        }

        let document = Document::new(
            id,
            draft.title.unwrap_or_else(|| UNTITLED_TITLE.to_string()),
            draft.content.unwrap_or_default(),
            now,
        );

        let path = self.document_path(&document.id);
        let json = serde_json::to_string_pretty(&document).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        if self.cache.insert(document.clone()).is_some() {
            tracing::info!("Overwrote document {}", document.id);
        } else {
            tracing::info!("Saved document {} ({} cached)", document.id, self.cache.len());
        }
        Ok(document)
    }

    /// Read a document from disk
    pub fn load(&self, id: &str) -> Result<Document, StoreError> {
        if !is_safe_id(id) {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        let path = self.document_path(id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { id: id.to_string() });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let document =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json { path, source })?;
        tracing::debug!("Loaded document {}", id);
        Ok(document)
    }

    /// Metadata for every document on disk, most recently updated first
    ///
    /// Ties on `updated_at` keep directory scan order, which depends on the
    /// filesystem.
    pub fn list(&self) -> Result<Vec<DocumentMetadata>, StoreError> {
        let entries = fs::read_dir(&self.data_dir).map_err(|source| StoreError::Io {
            path: self.data_dir.clone(),
            source,
        })?;

        let mut documents = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.data_dir.clone(),
                source,
            })?;
            let is_document = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(DOCUMENT_EXTENSION));
            if !is_document {
                continue;
            }
            documents.push(read_metadata(&entry.path())?);
        }

        document::sort_most_recent_first(&mut documents);
        tracing::debug!("Listed {} documents", documents.len());
        Ok(documents)
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.data_dir.join(format!("{id}{DOCUMENT_EXTENSION}"))
    }
}

fn read_metadata(path: &Path) -> Result<DocumentMetadata, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Ids become file names, so they must stay inside the data directory
fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0'])
}
