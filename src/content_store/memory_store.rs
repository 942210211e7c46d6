//! In-memory content repository.

use super::models::{ContentDocument, DocumentId, NewContentDocument};
use super::trait_def::ContentRepository;
use crate::album_store::AlbumId;
use anyhow::{anyhow, bail, Result};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub struct InMemoryContentStore {
    documents: Mutex<HashMap<AlbumId, ContentDocument>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn documents(&self) -> Result<MutexGuard<'_, HashMap<AlbumId, ContentDocument>>> {
        self.documents
            .lock()
            .map_err(|_| anyhow!("In-memory content store lock is poisoned"))
    }
}

impl ContentRepository for InMemoryContentStore {
    fn find_all(&self) -> Result<Vec<ContentDocument>> {
        Ok(self.documents()?.values().cloned().collect())
    }

    fn find_by_album_id(&self, album_id: AlbumId) -> Result<Option<ContentDocument>> {
        Ok(self.documents()?.get(&album_id).cloned())
    }

    fn create(&self, document: &NewContentDocument) -> Result<DocumentId> {
        let mut documents = self.documents()?;
        if documents.contains_key(&document.album_id) {
            bail!("Album {} already has a content document", document.album_id);
        }
        let document_id = DocumentId::generate();
        documents.insert(
            document.album_id,
            ContentDocument::from_parts(document_id.clone(), document.clone()),
        );
        Ok(document_id)
    }

    fn delete_by_album_id(&self, album_id: AlbumId) -> Result<bool> {
        Ok(self.documents()?.remove(&album_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_document_per_album() {
        let store = InMemoryContentStore::new();
        let document = NewContentDocument::for_album(1, "Jeru", "Gerry Mulligan", "cool".into());

        let document_id = store.create(&document).unwrap();
        assert!(store.create(&document).is_err());

        let found = store.find_by_album_id(1).unwrap().unwrap();
        assert_eq!(found.document_id, document_id);
        assert_eq!(found.name, "[Jeru] featured by Gerry Mulligan");
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn delete_reports_missing_documents() {
        let store = InMemoryContentStore::new();
        store
            .create(&NewContentDocument::for_album(4, "A", "B", "c".into()))
            .unwrap();

        assert!(store.delete_by_album_id(4).unwrap());
        assert!(!store.delete_by_album_id(4).unwrap());
        assert!(store.find_all().unwrap().is_empty());
    }
}
