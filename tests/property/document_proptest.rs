//! Property-based tests for document persistence

use proptest::prelude::*;
use rubricy::backend::documents::{DocumentDraft, DocumentStore};
use tempfile::TempDir;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_save_load_round_trip(
        id in "[a-zA-Z0-9_-]{1,24}",
        title in ".{0,40}",
        content in "(?s).{0,200}",
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = DocumentStore::open(dir.path()).unwrap();

        let saved = store.save(DocumentDraft {
            id: Some(id.clone()),
            title: Some(title.clone()),
            content: Some(content.clone()),
        }).unwrap();
        let loaded = store.load(&id).unwrap();

        prop_assert_eq!(&loaded.id, &id);
        prop_assert_eq!(&loaded.title, &title);
        prop_assert_eq!(&loaded.content, &content);
        prop_assert_eq!(loaded, saved);
    }
}
