//! Builder for opening the SQLite goal catalog.

use std::path::{Path, PathBuf};

use crate::{
    db::Database,
    error::{CoachError, Result},
};

/// Builder for creating and configuring the goal catalog database.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    database_path: Option<PathBuf>,
}

impl CatalogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/coach/coach.db` or `~/.local/share/coach/coach.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// The path the catalog will be opened at.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::XdgDirectory` if no explicit path was given and
    /// the XDG data directory cannot be determined.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Self::default_database_path(),
        }
    }

    /// Opens the catalog, creating parent directories and the schema as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::FileSystem` if the parent directory cannot be
    /// created and `CoachError::Database` if database initialization fails.
    pub fn build(self) -> Result<Database> {
        let db_path = self.resolve_path()?;

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CoachError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        log::debug!("Opening goal catalog at {}", db_path.display());
        Database::new(&db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("coach")
            .place_data_file("coach.db")
            .map_err(|e| CoachError::XdgDirectory(e.to_string()))
    }
}
