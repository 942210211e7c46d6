mod memory_store;
mod models;
mod schema;
mod sqlite_store;
mod trait_def;

pub use memory_store::InMemoryContentStore;
pub use models::*;
pub use schema::CONTENT_VERSIONED_SCHEMAS;
pub use sqlite_store::SqliteContentStore;
pub use trait_def::ContentRepository;
#[cfg(any(test, feature = "mock"))]
pub use trait_def::MockContentRepository;
