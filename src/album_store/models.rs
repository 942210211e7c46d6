use serde::{Deserialize, Serialize};

/// Identifier of an album record, generated by the relational store.
pub type AlbumId = i64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub has_read: bool,
}

/// Structured fields of an album that is about to be stored.
/// The id is assigned by the store and `has_read` always starts false.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAlbumRecord {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// A single-field update of an album record.
/// The service only sets `HasRead`; the other fields complete the
/// repository's field-and-value update interface.
#[derive(Clone, Debug, PartialEq)]
pub enum AlbumUpdate {
    Title(String),
    Artist(String),
    Price(f64),
    HasRead(bool),
}

impl AlbumUpdate {
    pub fn column(&self) -> &'static str {
        match self {
            AlbumUpdate::Title(_) => "title",
            AlbumUpdate::Artist(_) => "artist",
            AlbumUpdate::Price(_) => "price",
            AlbumUpdate::HasRead(_) => "has_read",
        }
    }

    pub fn apply_to(&self, record: &mut AlbumRecord) {
        match self {
            AlbumUpdate::Title(title) => record.title = title.clone(),
            AlbumUpdate::Artist(artist) => record.artist = artist.clone(),
            AlbumUpdate::Price(price) => record.price = *price,
            AlbumUpdate::HasRead(has_read) => record.has_read = *has_read,
        }
    }
}
