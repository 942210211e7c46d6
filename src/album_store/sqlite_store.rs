//! SQLite-backed album repository.

use super::models::{AlbumId, AlbumRecord, AlbumUpdate, NewAlbumRecord};
use super::schema::{ALBUMS_VERSIONED_SCHEMAS, TABLE_ALBUMS};
use super::trait_def::AlbumRepository;
use crate::sqlite_persistence::open_versioned_db;
use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, ToSql};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::info;

pub struct SqliteAlbumStore {
    conn: Mutex<Connection>,
}

impl SqliteAlbumStore {
    pub fn new<P: AsRef<Path>>(db_path: P, busy_timeout: Duration) -> Result<Self> {
        let conn = open_versioned_db(db_path, ALBUMS_VERSIONED_SCHEMAS, "albums", busy_timeout)?;

        let album_count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", TABLE_ALBUMS), [], |r| {
                r.get(0)
            })
            .unwrap_or(0);
        info!("Opened albums database with {} albums", album_count);

        Ok(SqliteAlbumStore {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Albums database connection lock is poisoned"))
    }

    fn parse_album_row(row: &rusqlite::Row) -> rusqlite::Result<AlbumRecord> {
        Ok(AlbumRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            artist: row.get(2)?,
            price: row.get(3)?,
            has_read: row.get(4)?,
        })
    }
}

impl AlbumRepository for SqliteAlbumStore {
    fn find_all(&self) -> Result<Vec<AlbumRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, title, artist, price, has_read FROM albums ORDER BY id ASC",
        )?;
        let albums = stmt
            .query_map([], Self::parse_album_row)?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read albums")?;
        Ok(albums)
    }

    fn find_by_id(&self, id: AlbumId) -> Result<Option<AlbumRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, title, artist, price, has_read FROM albums WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], Self::parse_album_row) {
            Ok(album) => Ok(Some(album)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read album {}", id)),
        }
    }

    fn create(&self, album: &NewAlbumRecord) -> Result<AlbumRecord> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO albums (title, artist, price, has_read) VALUES (?1, ?2, ?3, 0)",
            params![&album.title, &album.artist, album.price],
        )
        .with_context(|| format!("Failed to insert album {}", album.title))?;

        Ok(AlbumRecord {
            id: conn.last_insert_rowid(),
            title: album.title.clone(),
            artist: album.artist.clone(),
            price: album.price,
            has_read: false,
        })
    }

    fn update(&self, id: AlbumId, update: &AlbumUpdate) -> Result<bool> {
        let value: &dyn ToSql = match update {
            AlbumUpdate::Title(title) => title,
            AlbumUpdate::Artist(artist) => artist,
            AlbumUpdate::Price(price) => price,
            AlbumUpdate::HasRead(has_read) => has_read,
        };
        let conn = self.conn()?;
        let changed = conn
            .execute(
                &format!("UPDATE albums SET {} = ?1 WHERE id = ?2", update.column()),
                params![value, id],
            )
            .with_context(|| format!("Failed to update {} of album {}", update.column(), id))?;
        Ok(changed > 0)
    }

    fn delete(&self, id: AlbumId) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn
            .execute("DELETE FROM albums WHERE id = ?1", params![id])
            .with_context(|| format!("Failed to delete album {}", id))?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite_persistence::{VersionedSchema, BASE_DB_VERSION};
    use tempfile::TempDir;

    fn create_tmp_store() -> (SqliteAlbumStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("albums.db");
        let store = SqliteAlbumStore::new(&db_path, Duration::from_secs(1)).unwrap();
        (store, temp_dir)
    }

    fn new_album(title: &str) -> NewAlbumRecord {
        NewAlbumRecord {
            title: title.to_string(),
            artist: "John Coltrane".to_string(),
            price: 56.99,
        }
    }

    #[test]
    fn creates_albums_with_increasing_ids() {
        let (store, _temp_dir) = create_tmp_store();

        let first = store.create(&new_album("Blue Train")).unwrap();
        let second = store.create(&new_album("Giant Steps")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.has_read);
        assert_eq!(store.find_by_id(1).unwrap(), Some(first));
    }

    #[test]
    fn find_all_is_sorted_by_id() {
        let (store, _temp_dir) = create_tmp_store();
        for title in ["A", "B", "C"] {
            store.create(&new_album(title)).unwrap();
        }

        let ids: Vec<AlbumId> = store.find_all().unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn find_by_id_returns_none_when_missing() {
        let (store, _temp_dir) = create_tmp_store();
        assert_eq!(store.find_by_id(42).unwrap(), None);
    }

    #[test]
    fn updates_single_fields() {
        let (store, _temp_dir) = create_tmp_store();
        let album = store.create(&new_album("Blue Train")).unwrap();

        assert!(store
            .update(album.id, &AlbumUpdate::HasRead(true))
            .unwrap());
        assert!(store
            .update(album.id, &AlbumUpdate::Price(10.5))
            .unwrap());

        let updated = store.find_by_id(album.id).unwrap().unwrap();
        assert!(updated.has_read);
        assert_eq!(updated.price, 10.5);
        assert_eq!(updated.title, "Blue Train");

        assert!(!store.update(999, &AlbumUpdate::HasRead(true)).unwrap());
    }

    #[test]
    fn delete_reports_whether_a_row_was_removed() {
        let (store, _temp_dir) = create_tmp_store();
        let album = store.create(&new_album("Blue Train")).unwrap();

        assert!(store.delete(album.id).unwrap());
        assert!(!store.delete(album.id).unwrap());
        assert_eq!(store.find_by_id(album.id).unwrap(), None);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let (store, _temp_dir) = create_tmp_store();
        store.create(&new_album("A")).unwrap();
        let second = store.create(&new_album("B")).unwrap();
        store.delete(second.id).unwrap();

        let third = store.create(&new_album("C")).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn reopening_keeps_data() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("albums.db");
        {
            let store = SqliteAlbumStore::new(&db_path, Duration::from_secs(1)).unwrap();
            store.create(&new_album("Blue Train")).unwrap();
        }

        let store = SqliteAlbumStore::new(&db_path, Duration::from_secs(1)).unwrap();
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn migrates_albums_without_read_flag() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("albums.db");
        {
            let conn = Connection::open(&db_path).unwrap();
            let v0: &VersionedSchema = &ALBUMS_VERSIONED_SCHEMAS[0];
            v0.create(&conn).unwrap();
            conn.execute(
                "INSERT INTO albums (title, artist, price) VALUES ('Jeru', 'Gerry Mulligan', 17.99)",
                [],
            )
            .unwrap();
        }

        let store = SqliteAlbumStore::new(&db_path, Duration::from_secs(1)).unwrap();
        let album = store.find_by_id(1).unwrap().unwrap();
        assert_eq!(album.title, "Jeru");
        assert!(!album.has_read);

        let conn = store.conn().unwrap();
        let version: i64 = conn
            .query_row("PRAGMA user_version", [], |r| r.get(0))
            .unwrap();
        assert_eq!(version as usize, BASE_DB_VERSION + 1);
    }
}
