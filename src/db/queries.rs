use rusqlite::types::Value;
use rusqlite::{params, Row};

use crate::db::schema::{
    COUNT_ROWS, CREATE_TABLE, DROP_TABLE, SELECT_ALL, TABLE_EXISTS, TABLE_NAME,
};
use crate::error::{ExplorerError, Result};
use crate::models::file::FileRecord;

use super::Database;

impl Database {
    // ─── Schema ───

    /// Create the table if absent. Safe to call repeatedly.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn().execute_batch(CREATE_TABLE)?;
        Ok(())
    }

    /// Drop the table and every row in it. No-op if it does not exist.
    pub fn drop_schema(&self) -> Result<()> {
        self.conn().execute_batch(DROP_TABLE)?;
        Ok(())
    }

    /// Check whether the table exists.
    pub fn table_exists(&self) -> Result<bool> {
        let count: i64 = self
            .conn()
            .query_row(TABLE_EXISTS, params![TABLE_NAME], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Count stored rows (0 when the table is missing).
    pub fn count_rows(&self) -> Result<usize> {
        if !self.table_exists()? {
            return Ok(0);
        }
        let count: i64 = self.conn().query_row(COUNT_ROWS, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ─── Records ───

    /// Stream every record in store-native order. Returns the number visited.
    ///
    /// A missing table yields no rows.
    pub fn for_each_record<F>(&self, mut on_record: F) -> Result<usize>
    where
        F: FnMut(FileRecord) -> Result<()>,
    {
        if !self.table_exists()? {
            return Ok(0);
        }
        let mut stmt = self.conn().prepare(SELECT_ALL)?;
        let mut rows = stmt.query([])?;
        let mut visited = 0;
        while let Some(row) = rows.next()? {
            on_record(Self::row_to_record(row)?)?;
            visited += 1;
        }
        Ok(visited)
    }

    /// Get all records.
    pub fn select_all(&self) -> Result<Vec<FileRecord>> {
        let mut records = Vec::new();
        self.for_each_record(|record| {
            records.push(record);
            Ok(())
        })?;
        Ok(records)
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<FileRecord> {
        Ok(FileRecord {
            id: row.get(0)?,
            digest: row.get(1)?,
            path: row.get(2)?,
        })
    }

    // ─── Raw queries ───

    /// Run caller-supplied SQL and stream each result row to `on_row`.
    ///
    /// The SQL is trusted and runs unparameterized; never route untrusted
    /// input here. Statements that produce no rows run to completion and
    /// yield nothing. Returns the number of rows produced.
    pub fn execute<F>(&self, sql: &str, mut on_row: F) -> Result<usize>
    where
        F: FnMut(&[Value]) -> Result<()>,
    {
        let query_err = |source: rusqlite::Error| ExplorerError::Query {
            sql: sql.to_owned(),
            source,
        };
        let mut stmt = self.conn().prepare(sql).map_err(query_err)?;
        let width = stmt.column_count();
        let mut rows = stmt.query([]).map_err(query_err)?;
        let mut produced = 0;
        while let Some(row) = rows.next().map_err(query_err)? {
            let values = (0..width)
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(query_err)?;
            on_row(values.as_slice())?;
            produced += 1;
        }
        Ok(produced)
    }
}
