//! ContentRepository trait definition.
//!
//! The document half of an album. Documents are correlated to album records
//! through the `album_id` they embed, and there is at most one per album.

use super::models::{ContentDocument, DocumentId, NewContentDocument};
use crate::album_store::AlbumId;
use anyhow::Result;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContentRepository: Send + Sync {
    /// Returns every stored document, in no particular order.
    fn find_all(&self) -> Result<Vec<ContentDocument>>;

    /// Returns the document correlated to the given album.
    /// Returns None if the album has no document.
    fn find_by_album_id(&self, album_id: AlbumId) -> Result<Option<ContentDocument>>;

    /// Stores a new document and returns its generated id.
    /// Fails if the album already has a document.
    fn create(&self, document: &NewContentDocument) -> Result<DocumentId>;

    /// Deletes the document correlated to the given album.
    /// Returns false if there was nothing to delete.
    fn delete_by_album_id(&self, album_id: AlbumId) -> Result<bool>;
}
