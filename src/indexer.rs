use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::db::{Database, IngestBatch};
use crate::error::{ExplorerError, Result};
use crate::ingest::hasher;
use crate::ingest::parser::{parse_line, ParsedLine};
use crate::ingest::walker;

/// Statistics from an ingest run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestResult {
    /// Rows read from `<digest> <path>` lines.
    pub from_stream: usize,
    /// Rows produced by hashing a directory tree.
    pub from_tree: usize,
    /// Whether the stream ended at the stop sentinel rather than EOF.
    pub stopped_at_sentinel: bool,
}

impl IngestResult {
    #[must_use]
    pub fn total(&self) -> usize {
        self.from_stream + self.from_tree
    }
}

/// Ingest from a line stream and/or a directory tree in one transaction.
///
/// Stream rows are staged first, then tree rows. Either every row is
/// committed or, on the first error, none are.
pub fn run_ingest<R: BufRead>(
    db: &mut Database,
    stream: Option<R>,
    root: Option<&Path>,
) -> Result<IngestResult> {
    let mut result = IngestResult::default();

    // One commit for the whole batch: per-row commits are far slower.
    let mut batch = db.begin_ingest()?;
    let staged = (|| -> Result<()> {
        if let Some(reader) = stream {
            let (inserted, stopped) = ingest_lines(&mut batch, reader)?;
            result.from_stream = inserted;
            result.stopped_at_sentinel = stopped;
        }
        if let Some(root) = root {
            result.from_tree = ingest_tree(&mut batch, root)?;
        }
        Ok(())
    })();

    match staged {
        Ok(()) => {
            debug!(rows = batch.staged(), "committing ingest batch");
            batch.commit()?;
        }
        Err(e) => {
            warn!(error = %e, "ingest failed, rolling back");
            if let Err(rollback_err) = batch.rollback() {
                warn!(error = %rollback_err, "rollback failed");
            }
            return Err(e);
        }
    }

    info!(
        total = result.total(),
        from_stream = result.from_stream,
        from_tree = result.from_tree,
        "ingest committed"
    );
    Ok(result)
}

/// Stage one row per `<digest> <path>` line until EOF or the stop sentinel.
///
/// Returns the rows staged and whether the sentinel was hit.
pub fn ingest_lines<R: BufRead>(batch: &mut IngestBatch<'_>, reader: R) -> Result<(usize, bool)> {
    let mut inserted = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line, idx + 1)? {
            ParsedLine::Stop => {
                debug!(line_no = idx + 1, "stop sentinel read");
                return Ok((inserted, true));
            }
            ParsedLine::Entry { digest, path } => {
                batch.insert(digest, path)?;
                inserted += 1;
            }
        }
    }
    Ok((inserted, false))
}

/// Hash and stage every file under `root`. Returns the rows staged.
pub fn ingest_tree(batch: &mut IngestBatch<'_>, root: &Path) -> Result<usize> {
    let mut inserted = 0;
    for path in walker::walk(root)? {
        let path = path?;
        let digest = hasher::hash_file(&path).map_err(|source| ExplorerError::FileRead {
            path: path.clone(),
            source,
        })?;
        let path_str = path
            .to_str()
            .ok_or_else(|| ExplorerError::InvalidPath { path: path.clone() })?;
        batch.insert(&digest, path_str)?;
        inserted += 1;
    }
    Ok(inserted)
}
