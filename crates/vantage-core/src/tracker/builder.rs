//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Tracker;
use crate::{
    config::EngineConfig,
    db::Database,
    engine::Engine,
    error::{Result, VantageError},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    config: Option<EngineConfig>,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/vantage/vantage.db` or `~/.local/share/vantage/vantage.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the engine configuration. Defaults to [`EngineConfig::default`].
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the configured tracker, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::Configuration` for invalid engine settings,
    /// `VantageError::FileSystem` if the database directory cannot be created,
    /// and `VantageError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Tracker> {
        let engine = Engine::new(self.config.unwrap_or_default())?;

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| VantageError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .map_err(VantageError::join)??;

        debug!("Using database at {}", db_path.display());
        Ok(Tracker::new(db_path, engine))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("vantage")
            .place_data_file("vantage.db")
            .map_err(|e| VantageError::XdgDirectory(e.to_string()))
    }
}
