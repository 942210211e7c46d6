//! In-memory album repository, used when the server runs without a database
//! and by tests.

use super::models::{AlbumId, AlbumRecord, AlbumUpdate, NewAlbumRecord};
use super::trait_def::AlbumRepository;
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Inner {
    albums: BTreeMap<AlbumId, AlbumRecord>,
    last_id: AlbumId,
}

#[derive(Default)]
pub struct InMemoryAlbumStore {
    inner: Mutex<Inner>,
}

impl InMemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn inner(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("In-memory album store lock is poisoned"))
    }
}

impl AlbumRepository for InMemoryAlbumStore {
    fn find_all(&self) -> Result<Vec<AlbumRecord>> {
        Ok(self.inner()?.albums.values().cloned().collect())
    }

    fn find_by_id(&self, id: AlbumId) -> Result<Option<AlbumRecord>> {
        Ok(self.inner()?.albums.get(&id).cloned())
    }

    fn create(&self, album: &NewAlbumRecord) -> Result<AlbumRecord> {
        let mut inner = self.inner()?;
        inner.last_id += 1;
        let record = AlbumRecord {
            id: inner.last_id,
            title: album.title.clone(),
            artist: album.artist.clone(),
            price: album.price,
            has_read: false,
        };
        inner.albums.insert(record.id, record.clone());
        Ok(record)
    }

    fn update(&self, id: AlbumId, update: &AlbumUpdate) -> Result<bool> {
        match self.inner()?.albums.get_mut(&id) {
            Some(record) => {
                update.apply_to(record);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: AlbumId) -> Result<bool> {
        Ok(self.inner()?.albums.remove(&id).is_some())
    }
}
