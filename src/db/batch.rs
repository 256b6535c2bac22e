use rusqlite::{params, DropBehavior, Transaction, TransactionBehavior};
use tracing::debug;

use crate::db::schema::INSERT_ROW;
use crate::error::Result;

use super::Database;

/// An open all-or-nothing ingest transaction.
///
/// Rows staged with [`IngestBatch::insert`] become visible only after
/// [`IngestBatch::commit`]. Dropping the batch without committing rolls
/// every staged row back.
pub struct IngestBatch<'conn> {
    tx: Transaction<'conn>,
    staged: usize,
}

impl Database {
    /// Begin an ingest batch. Takes the write lock immediately.
    pub fn begin_ingest(&mut self) -> Result<IngestBatch<'_>> {
        let mut tx = self
            .conn_mut()
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.set_drop_behavior(DropBehavior::Rollback);
        debug!("ingest transaction started");
        Ok(IngestBatch { tx, staged: 0 })
    }
}

impl IngestBatch<'_> {
    /// Stage one (digest, path) row.
    pub fn insert(&mut self, digest: &str, path: &str) -> Result<()> {
        self.tx
            .prepare_cached(INSERT_ROW)?
            .execute(params![digest, path])?;
        self.staged += 1;
        debug!(digest, path, "staged row");
        Ok(())
    }

    /// Number of rows staged so far.
    #[must_use]
    pub fn staged(&self) -> usize {
        self.staged
    }

    /// Commit every staged row. Returns the number committed.
    pub fn commit(self) -> Result<usize> {
        let staged = self.staged;
        self.tx.commit()?;
        debug!(rows = staged, "ingest transaction committed");
        Ok(staged)
    }

    /// Discard every staged row.
    pub fn rollback(self) -> Result<()> {
        let staged = self.staged;
        self.tx.rollback()?;
        debug!(rows = staged, "ingest transaction rolled back");
        Ok(())
    }
}
