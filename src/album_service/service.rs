//! Joins the relational album records with their content documents.
//!
//! Writes go to the relational store first and then to the document store.
//! There is no transaction spanning both: a failed document write is followed
//! by a single best-effort delete of the record that was just created.

use super::error::AlbumServiceError;
use super::models::{AlbumView, CreateAlbumRequest};
use crate::album_store::{AlbumId, AlbumRecord, AlbumRepository, AlbumUpdate};
use crate::content_store::{ContentRepository, NewContentDocument};
use anyhow::anyhow;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct AlbumService {
    albums: Arc<dyn AlbumRepository>,
    contents: Arc<dyn ContentRepository>,
}

/// Slice of a result set of `len` items covered by the given page.
/// Page 0 is the same as page 1, a page size of 0 means no limit.
fn page_window(len: usize, page: usize, page_size: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..len;
    }
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

fn check_id(id: AlbumId) -> Result<(), AlbumServiceError> {
    if id <= 0 {
        return Err(AlbumServiceError::Validation(format!(
            "album id must be a positive integer, got {}",
            id
        )));
    }
    Ok(())
}

impl AlbumService {
    pub fn new(albums: Arc<dyn AlbumRepository>, contents: Arc<dyn ContentRepository>) -> Self {
        AlbumService { albums, contents }
    }

    pub fn list_albums(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<AlbumView>, AlbumServiceError> {
        let mut records = self
            .albums
            .find_all()
            .map_err(AlbumServiceError::relational)?;
        let window = page_window(records.len(), page, page_size);
        let records: Vec<AlbumRecord> = records.drain(window).collect();
        if records.is_empty() {
            return Ok(vec![]);
        }

        let mut contents: HashMap<AlbumId, String> = HashMap::new();
        match self.contents.find_all() {
            Ok(documents) => {
                for document in documents {
                    contents.insert(document.album_id, document.content);
                }
            }
            Err(err) => warn!(
                "Failed to read content documents, listing albums without content: {:#}",
                err
            ),
        }

        Ok(records
            .into_iter()
            .map(|record| {
                let content = contents.remove(&record.id).unwrap_or_default();
                AlbumView::from_record(record, content)
            })
            .collect())
    }

    /// Returns the album and marks it as read.
    pub fn get_album(&self, id: AlbumId) -> Result<AlbumView, AlbumServiceError> {
        check_id(id)?;
        let mut record = self
            .albums
            .find_by_id(id)
            .map_err(AlbumServiceError::relational)?
            .ok_or(AlbumServiceError::NotFound(id))?;

        if !record.has_read {
            match self.albums.update(id, &AlbumUpdate::HasRead(true)) {
                Ok(true) => record.has_read = true,
                Ok(false) => warn!("Album {} vanished before it could be marked as read", id),
                Err(err) => warn!("Failed to mark album {} as read: {:#}", id, err),
            }
        }

        let content = self.content_of(id);
        Ok(AlbumView::from_record(record, content))
    }

    pub fn create_album(
        &self,
        request: CreateAlbumRequest,
    ) -> Result<AlbumView, AlbumServiceError> {
        let request = request.validate()?;
        let record = self
            .albums
            .create(&request.record)
            .map_err(AlbumServiceError::relational)?;

        let document = NewContentDocument::for_album(
            record.id,
            &record.title,
            &record.artist,
            request.content,
        );
        let failure = match self.contents.create(&document) {
            Ok(document_id) if document_id.is_valid() => {
                info!(
                    "Created album {} with content document {}",
                    record.id, document_id
                );
                return Ok(AlbumView::from_record(record, document.content));
            }
            Ok(_) => anyhow!("Content store returned an empty document id"),
            Err(err) => err,
        };

        warn!(
            "Failed to store content of album {}, removing the record: {:#}",
            record.id, failure
        );
        match self.albums.delete(record.id) {
            Ok(true) => {}
            Ok(false) => warn!("Album {} was already gone during rollback", record.id),
            Err(err) => error!(
                "Rollback of album {} failed, the record is left without content: {:#}",
                record.id, err
            ),
        }
        Err(AlbumServiceError::document(failure))
    }

    pub fn delete_album(&self, id: AlbumId) -> Result<(), AlbumServiceError> {
        check_id(id)?;
        self.albums
            .find_by_id(id)
            .map_err(AlbumServiceError::relational)?
            .ok_or(AlbumServiceError::NotFound(id))?;

        if !self
            .albums
            .delete(id)
            .map_err(AlbumServiceError::relational)?
        {
            return Err(AlbumServiceError::NotFound(id));
        }

        match self.contents.delete_by_album_id(id) {
            Ok(true) => debug!("Deleted content of album {}", id),
            Ok(false) => debug!("Album {} had no content to delete", id),
            Err(err) => warn!("Failed to delete content of album {}: {:#}", id, err),
        }
        info!("Deleted album {}", id);
        Ok(())
    }

    fn content_of(&self, id: AlbumId) -> String {
        match self.contents.find_by_album_id(id) {
            Ok(Some(document)) => document.content,
            Ok(None) => String::new(),
            Err(err) => {
                warn!("Failed to read content of album {}: {:#}", id, err);
                String::new()
            }
        }
    }
}
