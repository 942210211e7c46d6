//! SQLite-backed content repository storing JSON documents.

use super::models::{ContentDocument, DocumentId, NewContentDocument};
use super::schema::CONTENT_VERSIONED_SCHEMAS;
use super::trait_def::ContentRepository;
use crate::album_store::AlbumId;
use crate::sqlite_persistence::open_versioned_db;
use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{info, warn};

pub struct SqliteContentStore {
    conn: Mutex<Connection>,
}

impl SqliteContentStore {
    pub fn new<P: AsRef<Path>>(db_path: P, busy_timeout: Duration) -> Result<Self> {
        let conn = open_versioned_db(db_path, CONTENT_VERSIONED_SCHEMAS, "content", busy_timeout)?;

        let document_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM content_documents", [], |r| r.get(0))
            .unwrap_or(0);
        info!("Opened content database with {} documents", document_count);

        Ok(SqliteContentStore {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Content database connection lock is poisoned"))
    }

    fn parse_document(id: String, body: &str) -> Result<ContentDocument> {
        let body: NewContentDocument = serde_json::from_str(body)
            .with_context(|| format!("Malformed content document {}", id))?;
        Ok(ContentDocument::from_parts(DocumentId(id), body))
    }
}

impl ContentRepository for SqliteContentStore {
    /// Documents whose body cannot be decoded are logged and left out.
    fn find_all(&self) -> Result<Vec<ContentDocument>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached("SELECT id, body FROM content_documents")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read content documents")?;

        Ok(rows
            .into_iter()
            .filter_map(|(id, body)| match Self::parse_document(id, &body) {
                Ok(document) => Some(document),
                Err(err) => {
                    warn!("Skipping content document: {:#}", err);
                    None
                }
            })
            .collect())
    }

    fn find_by_album_id(&self, album_id: AlbumId) -> Result<Option<ContentDocument>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare_cached("SELECT id, body FROM content_documents WHERE album_id = ?1")?;
        let row = match stmt.query_row(params![album_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        }) {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read content of album {}", album_id))
            }
        };
        Self::parse_document(row.0, &row.1).map(Some)
    }

    fn create(&self, document: &NewContentDocument) -> Result<DocumentId> {
        let document_id = DocumentId::generate();
        let body = serde_json::to_string(document)?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO content_documents (id, album_id, body) VALUES (?1, ?2, ?3)",
            params![&document_id.0, document.album_id, body],
        )
        .with_context(|| format!("Failed to insert content of album {}", document.album_id))?;

        Ok(document_id)
    }

    fn delete_by_album_id(&self, album_id: AlbumId) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn
            .execute(
                "DELETE FROM content_documents WHERE album_id = ?1",
                params![album_id],
            )
            .with_context(|| format!("Failed to delete content of album {}", album_id))?;
        Ok(deleted > 0)
    }
}
