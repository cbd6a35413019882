use crate::shared::Document;
use std::collections::HashMap;

/// Process-lifetime copy of documents saved since startup
///
/// Only saves write here. Loads and listings read the disk directly, and
/// nothing repopulates the cache on startup, so after a restart it starts
/// empty even though files remain in the data directory.
#[derive(Debug, Clone, Default)]
pub struct DocumentCache {
    documents: HashMap<String, Document>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by id, returning the previous entry
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.id.clone(), document)
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
