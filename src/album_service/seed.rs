use super::error::AlbumServiceError;
use super::models::CreateAlbumRequest;
use super::service::AlbumService;
use tracing::info;

/// Title, artist and price of the albums inserted by `seed_demo_albums`.
pub const DEMO_ALBUMS: &[(&str, &str, f64)] = &[
    ("Blue Train", "John Coltrane", 56.99),
    ("Jeru", "Gerry Mulligan", 17.99),
    ("Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
];

/// Creates the demo albums through the service, unless some album exists
/// already. Returns the number of albums created.
pub fn seed_demo_albums(service: &AlbumService) -> Result<usize, AlbumServiceError> {
    if !service.list_albums(1, 1)?.is_empty() {
        info!("Albums already present, skipping demo data");
        return Ok(0);
    }

    for (title, artist, price) in DEMO_ALBUMS {
        let album = service.create_album(CreateAlbumRequest {
            title: Some(title.to_string()),
            artist: Some(artist.to_string()),
            price: Some(*price),
            content: Some(format!("content body for {}", title)),
        })?;
        info!("Seeded album {} \"{}\"", album.id, album.title);
    }
    Ok(DEMO_ALBUMS.len())
}
