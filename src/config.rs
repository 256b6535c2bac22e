use std::path::{Path, PathBuf};

use crate::error::{ExplorerError, Result};

/// Program name, used for the default database filename.
pub const PROGRAM_NAME: &str = "sqlitexplorer";
/// Extension of the default database file.
const DB_EXTENSION: &str = "sqlite3";

/// Runtime configuration, built once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the `SQLite` database file.
    pub db_path: PathBuf,
}

impl Config {
    /// Create config for an explicit database path.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Create config for `{HOME}/sqlitexplorer.sqlite3`.
    pub fn from_home() -> Result<Self> {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ExplorerError::Config("HOME is not set".into()))?;
        Ok(Self::in_dir(Path::new(&home)))
    }

    /// Create config for the default database filename inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(default_db_filename()))
    }

    /// Check whether the database file exists.
    #[must_use]
    pub fn db_exists(&self) -> bool {
        self.db_path.exists()
    }

    /// Delete the database file if present. Returns whether a file was removed.
    pub fn remove_db(&self) -> Result<bool> {
        if !self.db_exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.db_path)?;
        Ok(true)
    }
}

#[must_use]
pub fn default_db_filename() -> String {
    format!("{PROGRAM_NAME}.{DB_EXTENSION}")
}
