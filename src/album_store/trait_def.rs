//! AlbumRepository trait definition.
//!
//! The relational half of an album: identity and structured fields.
//! Implementations translate their backend errors so that a missing record
//! is never an `Err`.

use super::models::{AlbumId, AlbumRecord, AlbumUpdate, NewAlbumRecord};
use anyhow::Result;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait AlbumRepository: Send + Sync {
    /// Returns every album record, sorted by id.
    fn find_all(&self) -> Result<Vec<AlbumRecord>>;

    /// Returns the album record with the given id.
    /// Returns None if the record does not exist.
    fn find_by_id(&self, id: AlbumId) -> Result<Option<AlbumRecord>>;

    /// Stores a new album record and returns it with its generated id.
    fn create(&self, album: &NewAlbumRecord) -> Result<AlbumRecord>;

    /// Updates a single field of an album record.
    /// Returns false if the record does not exist.
    fn update(&self, id: AlbumId, update: &AlbumUpdate) -> Result<bool>;

    /// Deletes an album record.
    /// Returns false if the record does not exist.
    fn delete(&self, id: AlbumId) -> Result<bool>;
}
