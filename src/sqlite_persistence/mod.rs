mod versioned_schema;

pub use versioned_schema::{
    migrate_if_needed, Column, SqlType, Table, VersionedSchema, BASE_DB_VERSION,
};

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

/// Opens (creating if needed) a SQLite database, brings it to the latest of
/// `schemas` and applies the connection settings shared by every store.
pub fn open_versioned_db<P: AsRef<Path>>(
    db_path: P,
    schemas: &[VersionedSchema],
    db_name: &str,
    busy_timeout: Duration,
) -> Result<Connection> {
    let mut conn = Connection::open_with_flags(
        db_path.as_ref(),
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Failed to open {} database at {:?}", db_name, db_path.as_ref()))?;

    conn.busy_timeout(busy_timeout)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    migrate_if_needed(&mut conn, schemas, db_name)?;

    Ok(conn)
}
