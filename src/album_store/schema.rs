//! SQLite schema definitions for the albums database.
//!
//! Version 1 introduced the `has_read` flag; older databases are migrated by
//! adding the column with a false default.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};
use anyhow::Result;
use rusqlite::Connection;

pub const TABLE_ALBUMS: &str = "albums";

const ALBUMS_TABLE_V_0: Table = Table {
    name: TABLE_ALBUMS,
    columns: &[
        sqlite_column!(
            "id",
            &SqlType::Integer,
            is_primary_key = true,
            is_autoincrement = true
        ),
        sqlite_column!("title", &SqlType::Text, non_null = true),
        sqlite_column!("artist", &SqlType::Text, non_null = true),
        sqlite_column!("price", &SqlType::Real, non_null = true),
    ],
    indices: &[],
    unique_constraints: &[],
};

const ALBUMS_TABLE_V_1: Table = Table {
    name: TABLE_ALBUMS,
    columns: &[
        sqlite_column!(
            "id",
            &SqlType::Integer,
            is_primary_key = true,
            is_autoincrement = true
        ),
        sqlite_column!("title", &SqlType::Text, non_null = true),
        sqlite_column!("artist", &SqlType::Text, non_null = true),
        sqlite_column!("price", &SqlType::Real, non_null = true),
        sqlite_column!(
            "has_read",
            &SqlType::Integer,
            non_null = true,
            default_value = Some("0")
        ),
    ],
    indices: &[],
    unique_constraints: &[],
};

fn migrate_v0_to_v1(conn: &Connection) -> Result<()> {
    conn.execute(
        "ALTER TABLE albums ADD COLUMN has_read INTEGER NOT NULL DEFAULT 0",
        [],
    )?;
    Ok(())
}

pub const ALBUMS_VERSIONED_SCHEMAS: &[VersionedSchema] = &[
    VersionedSchema {
        version: 0,
        tables: &[ALBUMS_TABLE_V_0],
        migration: None,
    },
    VersionedSchema {
        version: 1,
        tables: &[ALBUMS_TABLE_V_1],
        migration: Some(migrate_v0_to_v1),
    },
];
