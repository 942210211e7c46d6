use super::error::AlbumServiceError;
use crate::album_store::{AlbumId, AlbumRecord, NewAlbumRecord};
use serde::{Deserialize, Serialize};

/// An album as returned to clients: the relational record merged with the
/// content of its document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlbumView {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub has_read: bool,
    pub content: String,
}

impl AlbumView {
    pub fn from_record(record: AlbumRecord, content: String) -> Self {
        AlbumView {
            id: record.id,
            title: record.title,
            artist: record.artist,
            price: record.price,
            has_read: record.has_read,
            content,
        }
    }
}

/// Body of a create request. Every field is optional here so that missing
/// fields surface as validation errors instead of deserialization errors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAlbumRequest {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
    pub content: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidAlbumRequest {
    pub record: NewAlbumRecord,
    pub content: String,
}

fn required_text(field: &str, value: Option<String>) -> Result<String, AlbumServiceError> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(AlbumServiceError::Validation(format!(
            "{} is required",
            field
        )));
    }
    Ok(value)
}

impl CreateAlbumRequest {
    pub fn validate(self) -> Result<ValidAlbumRequest, AlbumServiceError> {
        let title = required_text("title", self.title)?;
        let artist = required_text("artist", self.artist)?;
        let price = match self.price {
            None => {
                return Err(AlbumServiceError::Validation(
                    "price is required".to_string(),
                ))
            }
            Some(price) if !price.is_finite() || price < 0.0 => {
                return Err(AlbumServiceError::Validation(format!(
                    "price must be a non-negative number, got {}",
                    price
                )))
            }
            Some(price) => price,
        };
        let content = required_text("content", self.content)?;

        Ok(ValidAlbumRequest {
            record: NewAlbumRecord {
                title,
                artist,
                price,
            },
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateAlbumRequest {
        CreateAlbumRequest {
            title: Some("  Blue Train ".to_string()),
            artist: Some("John Coltrane".to_string()),
            price: Some(56.99),
            content: Some("liner notes".to_string()),
        }
    }

    #[test]
    fn trims_text_fields() {
        let valid = request().validate().unwrap();
        assert_eq!(valid.record.title, "Blue Train");
        assert_eq!(valid.record.price, 56.99);
        assert_eq!(valid.content, "liner notes");
    }

    #[test]
    fn rejects_missing_or_blank_fields() {
        let missing_title = CreateAlbumRequest {
            title: None,
            ..request()
        };
        let blank_content = CreateAlbumRequest {
            content: Some("   ".to_string()),
            ..request()
        };
        let missing_price = CreateAlbumRequest {
            price: None,
            ..request()
        };

        for invalid in [missing_title, blank_content, missing_price] {
            assert!(matches!(
                invalid.validate(),
                Err(AlbumServiceError::Validation(_))
            ));
        }
    }

    #[test]
    fn rejects_negative_and_non_finite_prices() {
        for price in [-0.01, f64::NAN, f64::INFINITY] {
            let invalid = CreateAlbumRequest {
                price: Some(price),
                ..request()
            };
            assert!(matches!(
                invalid.validate(),
                Err(AlbumServiceError::Validation(_))
            ));
        }

        let free = CreateAlbumRequest {
            price: Some(0.0),
            ..request()
        };
        assert!(free.validate().is_ok());
    }

    #[test]
    fn deserializes_partial_bodies() {
        let request: CreateAlbumRequest =
            serde_json::from_str(r#"{"title": "Jeru", "price": 17.99}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("Jeru"));
        assert_eq!(request.artist, None);
    }
}
