use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::error::Result;

/// Database wrapper for the file index.
///
/// One connection per process, used sequentially.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path.
    ///
    /// The table is not created here; call [`Database::ensure_schema`].
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Access the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Access the underlying connection mutably.
    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Close the connection, surfacing any error `Drop` would swallow.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
