mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

/// Where album records and content documents are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Two SQLite databases under `db_dir`.
    #[default]
    Sqlite,
    /// Process memory, lost on exit.
    Memory,
}

/// CLI arguments that can be used for config resolution.
/// TOML config values override these.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_dir: Option<PathBuf>,
    pub storage_backend: StorageBackend,
    pub port: u16,
    pub bind_address: String,
    pub logging_level: RequestsLoggingLevel,
    pub busy_timeout_ms: u64,
    pub seed_demo_data: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Always set for the SQLite backend.
    pub db_dir: Option<PathBuf>,
    pub storage_backend: StorageBackend,
    pub port: u16,
    pub bind_address: String,
    pub logging_level: RequestsLoggingLevel,
    pub busy_timeout: Duration,
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let storage_backend = match file.storage_backend {
            Some(s) => StorageBackend::from_str(&s, true)
                .map_err(|_| anyhow!("Unknown storage_backend in config file: {}", s))?,
            None => cli.storage_backend,
        };

        let db_dir = file.db_dir.map(PathBuf::from).or_else(|| cli.db_dir.clone());
        if let Some(db_dir) = &db_dir {
            if !db_dir.exists() {
                bail!("Database directory does not exist: {:?}", db_dir);
            }
            if !db_dir.is_dir() {
                bail!("db_dir is not a directory: {:?}", db_dir);
            }
        } else if storage_backend == StorageBackend::Sqlite {
            bail!("db_dir must be specified via --db-dir or in config file");
        }

        let port = file.port.unwrap_or(cli.port);
        let bind_address = file
            .bind_address
            .unwrap_or_else(|| cli.bind_address.clone());

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let busy_timeout =
            Duration::from_millis(file.busy_timeout_ms.unwrap_or(cli.busy_timeout_ms));
        let seed_demo_data = file.seed_demo_data.unwrap_or(cli.seed_demo_data);

        Ok(Self {
            db_dir,
            storage_backend,
            port,
            bind_address,
            logging_level,
            busy_timeout,
            seed_demo_data,
        })
    }

    pub fn albums_db_path(&self) -> Option<PathBuf> {
        self.db_dir.as_ref().map(|dir| dir.join("albums.db"))
    }

    pub fn content_db_path(&self) -> Option<PathBuf> {
        self.db_dir.as_ref().map(|dir| dir.join("content.db"))
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
