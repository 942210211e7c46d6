mod error;
mod models;
mod seed;
mod service;

pub use error::{AlbumServiceError, StoreKind};
pub use models::{AlbumView, CreateAlbumRequest, ValidAlbumRequest};
pub use seed::{seed_demo_albums, DEMO_ALBUMS};
pub use service::AlbumService;
