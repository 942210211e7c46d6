//! Album Server Library
//!
//! Exposes the internal modules for the binary and the end-to-end tests.

pub mod album_service;
pub mod album_store;
pub mod config;
pub mod content_store;
pub mod server;
pub mod sqlite_persistence;

pub use album_service::{AlbumService, AlbumServiceError, AlbumView, CreateAlbumRequest};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
