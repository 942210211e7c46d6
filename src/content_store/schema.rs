//! SQLite schema for the content database.
//!
//! Each row holds one JSON document in `body`; `album_id` is lifted out of
//! the document so correlation lookups can use an index.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

const CONTENT_DOCUMENTS_TABLE_V_0: Table = Table {
    name: "content_documents",
    columns: &[
        sqlite_column!("id", &SqlType::Text, is_primary_key = true, non_null = true),
        sqlite_column!("album_id", &SqlType::Integer, non_null = true),
        sqlite_column!("body", &SqlType::Text, non_null = true),
    ],
    indices: &[("idx_content_documents_album_id", "album_id")],
    unique_constraints: &[&["album_id"]],
};

pub const CONTENT_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[CONTENT_DOCUMENTS_TABLE_V_0],
    migration: None,
}];
