use crate::album_store::AlbumId;
use std::fmt;
use thiserror::Error;

/// The store a storage failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Relational,
    Document,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Relational => write!(f, "relational"),
            StoreKind::Document => write!(f, "document"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AlbumServiceError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Album {0} not found")]
    NotFound(AlbumId),

    #[error("The {store} store failed")]
    Storage {
        store: StoreKind,
        #[source]
        source: anyhow::Error,
    },
}

impl AlbumServiceError {
    pub fn relational(source: anyhow::Error) -> Self {
        AlbumServiceError::Storage {
            store: StoreKind::Relational,
            source,
        }
    }

    pub fn document(source: anyhow::Error) -> Self {
        AlbumServiceError::Storage {
            store: StoreKind::Document,
            source,
        }
    }
}
