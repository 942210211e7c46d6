use axum::extract::FromRef;

use crate::album_service::AlbumService;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedAlbumService = Arc<AlbumService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub album_service: GuardedAlbumService,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, album_service: GuardedAlbumService) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            album_service,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedAlbumService {
    fn from_ref(input: &ServerState) -> Self {
        input.album_service.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
