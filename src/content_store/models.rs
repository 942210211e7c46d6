use crate::album_store::AlbumId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier generated by the content store for each document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn generate() -> Self {
        DocumentId(uuid::Uuid::new_v4().to_string())
    }

    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The body of a content document, as it is persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewContentDocument {
    /// Informational copy of the album title and artist.
    pub name: String,
    pub content: String,
    /// Id of the album record this document belongs to.
    pub album_id: AlbumId,
}

impl NewContentDocument {
    pub fn for_album(album_id: AlbumId, title: &str, artist: &str, content: String) -> Self {
        NewContentDocument {
            name: format!("[{}] featured by {}", title, artist),
            content,
            album_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContentDocument {
    pub document_id: DocumentId,
    pub name: String,
    pub content: String,
    pub album_id: AlbumId,
}

impl ContentDocument {
    pub fn from_parts(document_id: DocumentId, body: NewContentDocument) -> Self {
        ContentDocument {
            document_id,
            name: body.name,
            content: body.content,
            album_id: body.album_id,
        }
    }
}
