use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{error, info};

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, state::*, RequestsLoggingLevel, ServerConfig};
use crate::album_service::{AlbumServiceError, CreateAlbumRequest};
use crate::album_store::AlbumId;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AlbumServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            AlbumServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            AlbumServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            AlbumServiceError::Storage { store, source } => {
                error!("Storage failure in the {} store: {:#}", store, source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Deserialize, Debug, Default)]
struct ListAlbumsParams {
    #[serde(default)]
    page: usize,
    #[serde(default)]
    page_size: usize,
}

fn parse_album_id(raw: &str) -> Result<AlbumId, AlbumServiceError> {
    raw.parse::<AlbumId>().map_err(|_| {
        AlbumServiceError::Validation(format!("album id must be a positive integer, got {}", raw))
    })
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

async fn list_albums(
    State(album_service): State<GuardedAlbumService>,
    params: Result<Query<ListAlbumsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            return AlbumServiceError::Validation(rejection.body_text()).into_response()
        }
    };
    match album_service.list_albums(params.page, params.page_size) {
        Ok(albums) => Json(albums).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn get_album(
    State(album_service): State<GuardedAlbumService>,
    Path(id): Path<String>,
) -> Response {
    match parse_album_id(&id).and_then(|id| album_service.get_album(id)) {
        Ok(album) => Json(album).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn post_album(
    State(album_service): State<GuardedAlbumService>,
    body: Result<Json<CreateAlbumRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return AlbumServiceError::Validation(rejection.body_text()).into_response()
        }
    };
    match album_service.create_album(request) {
        Ok(album) => (StatusCode::CREATED, Json(album)).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn delete_album(
    State(album_service): State<GuardedAlbumService>,
    Path(id): Path<String>,
) -> Response {
    match parse_album_id(&id).and_then(|id| album_service.delete_album(id)) {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn make_app(config: ServerConfig, album_service: GuardedAlbumService) -> Result<Router> {
    let state = ServerState::new(config, album_service);

    let album_routes: Router = Router::new()
        .route("/", get(list_albums).post(post_album))
        .route("/{id}", get(get_album).delete(delete_album))
        .with_state(state.clone());

    let app: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/v1/albums", album_routes)
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(
    album_service: GuardedAlbumService,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    bind_address: String,
) -> Result<()> {
    let config = ServerConfig {
        requests_logging_level,
        port,
        bind_address,
    };
    let address = format!("{}:{}", config.bind_address, config.port);
    let app = make_app(config, album_service)?;

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Listening on {}", address);

    Ok(axum::serve(listener, app).await?)
}
