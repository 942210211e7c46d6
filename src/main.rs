use album_server::album_service::{seed_demo_albums, AlbumService};
use album_server::album_store::{AlbumRepository, InMemoryAlbumStore, SqliteAlbumStore};
use album_server::config::{AppConfig, CliConfig, FileConfig, StorageBackend};
use album_server::content_store::{ContentRepository, InMemoryContentStore, SqliteContentStore};
use album_server::server::{run_server, RequestsLoggingLevel};
use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Directory holding albums.db and content.db.
    #[clap(long, value_parser = parse_path)]
    pub db_dir: Option<PathBuf>,

    /// Where albums are stored.
    #[clap(long, default_value = "sqlite")]
    pub storage_backend: StorageBackend,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3000)]
    pub port: u16,

    /// The address to bind to.
    #[clap(long, default_value = "127.0.0.1")]
    pub bind_address: String,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// How long a SQLite call waits on a locked database, in milliseconds.
    #[clap(long, default_value_t = 5000)]
    pub busy_timeout_ms: u64,

    /// Insert a few demo albums when there are none.
    #[clap(long)]
    pub seed_demo_data: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            db_dir: self.db_dir.clone(),
            storage_backend: self.storage_backend,
            port: self.port,
            bind_address: self.bind_address.clone(),
            logging_level: self.logging_level.clone(),
            busy_timeout_ms: self.busy_timeout_ms,
            seed_demo_data: self.seed_demo_data,
        }
    }
}

fn open_stores(
    config: &AppConfig,
) -> Result<(Arc<dyn AlbumRepository>, Arc<dyn ContentRepository>)> {
    match config.storage_backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage, albums will be lost on exit");
            Ok((
                Arc::new(InMemoryAlbumStore::new()),
                Arc::new(InMemoryContentStore::new()),
            ))
        }
        StorageBackend::Sqlite => {
            let albums_db_path = config
                .albums_db_path()
                .context("db_dir is required for the sqlite backend")?;
            let content_db_path = config
                .content_db_path()
                .context("db_dir is required for the sqlite backend")?;

            info!("Opening albums database at {:?}...", albums_db_path);
            let albums = SqliteAlbumStore::new(&albums_db_path, config.busy_timeout)?;
            info!("Opening content database at {:?}...", content_db_path);
            let contents = SqliteContentStore::new(&content_db_path, config.busy_timeout)?;
            Ok((Arc::new(albums), Arc::new(contents)))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let (albums, contents) = open_stores(&config)?;
    let album_service = Arc::new(AlbumService::new(albums, contents));

    if config.seed_demo_data {
        let seeded = seed_demo_albums(&album_service).context("Failed to seed demo albums")?;
        info!("Seeded {} demo albums", seeded);
    }

    info!(
        "Ready to serve at {}:{} (requests logging: {})",
        config.bind_address, config.port, config.logging_level
    );
    run_server(
        album_service,
        config.logging_level,
        config.port,
        config.bind_address,
    )
    .await
}
