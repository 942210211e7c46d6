mod memory_store;
mod models;
mod schema;
mod sqlite_store;
mod trait_def;

pub use memory_store::InMemoryAlbumStore;
pub use models::*;
pub use schema::ALBUMS_VERSIONED_SCHEMAS;
pub use sqlite_store::SqliteAlbumStore;
pub use trait_def::AlbumRepository;
#[cfg(any(test, feature = "mock"))]
pub use trait_def::MockAlbumRepository;
