use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed input on line {line_no}: expected '<sha1sum> <filepath>', got {line:?}")]
    MalformedLine { line_no: usize, line: String },

    #[error("query failed: {source} (SQL: {sql})")]
    Query {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("path is not valid UTF-8: {}", .path.display())]
    InvalidPath { path: PathBuf },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl ExplorerError {
    /// True when the downstream reader of stdout went away mid-write.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ExplorerError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
