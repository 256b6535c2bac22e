use std::io::Write;

use tracing::debug;

use crate::cli::output::RowFormat;
use crate::db::Database;
use crate::error::Result;

/// Run trusted SQL and write each result row to `out`, one per line.
///
/// Returns the number of rows written. Rows are written as they are
/// produced, so a closed `out` stops the query early.
pub fn run_query<W: Write>(
    db: &Database,
    sql: &str,
    format: RowFormat,
    out: &mut W,
) -> Result<usize> {
    debug!(sql, "evaluating");
    db.execute(sql, |values| {
        writeln!(out, "{}", format.render(values)?)?;
        Ok(())
    })
}

/// Write every stored record to `out` as `(rowid, sha1sum, filename)`, or as
/// one JSON object per line.
pub fn print_all<W: Write>(db: &Database, format: RowFormat, out: &mut W) -> Result<usize> {
    db.for_each_record(|record| {
        writeln!(out, "{}", format.render_record(&record)?)?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn db_with(rows: &[(&str, &str)]) -> Database {
        let mut db = Database::open_in_memory().unwrap();
        db.ensure_schema().unwrap();
        let mut batch = db.begin_ingest().unwrap();
        for (digest, path) in rows {
            batch.insert(digest, path).unwrap();
        }
        batch.commit().unwrap();
        db
    }

    #[test]
    fn run_query_writes_one_line_per_row() {
        let db = db_with(&[("h1", "/a"), ("h2", "/b")]);
        let mut out = Vec::new();
        let n = run_query(
            &db,
            "SELECT sha1sum FROM fileinfo ORDER BY sha1sum",
            RowFormat::Tuple,
            &mut out,
        )
        .unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "(\"h1\",)\n(\"h2\",)\n");
    }

    #[test]
    fn run_query_json() {
        let db = db_with(&[("h1", "/a")]);
        let mut out = Vec::new();
        run_query(&db, "SELECT sha1sum, filename FROM fileinfo", RowFormat::Json, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\"h1\",\"/a\"]\n");
    }

    #[test]
    fn run_query_bad_sql_writes_nothing() {
        let db = db_with(&[]);
        let mut out = Vec::new();
        assert!(run_query(&db, "SELECT * FROM nowhere", RowFormat::Tuple, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn print_all_renders_ids() {
        let db = db_with(&[("h1", "/a"), ("h2", "/b")]);
        let mut out = Vec::new();
        assert_eq!(print_all(&db, RowFormat::Tuple, &mut out).unwrap(), 2);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.contains(&r#"(1, "h1", "/a")"#));
        assert!(lines.contains(&r#"(2, "h2", "/b")"#));
    }

    #[test]
    fn print_all_after_drop_prints_nothing() {
        let db = db_with(&[("h1", "/a")]);
        db.drop_schema().unwrap();
        let mut out = Vec::new();
        assert_eq!(print_all(&db, RowFormat::Tuple, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn print_all_json_serializes_records() {
        let db = db_with(&[("h1", "/a")]);
        let mut out = Vec::new();
        print_all(&db, RowFormat::Json, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"rowid\":1,\"sha1sum\":\"h1\",\"filename\":\"/a\"}\n"
        );
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader gone"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_output_surfaces_broken_pipe() {
        let db = db_with(&[("h1", "/a"), ("h2", "/b")]);
        let err = print_all(&db, RowFormat::Tuple, &mut ClosedPipe).unwrap_err();
        assert!(err.is_broken_pipe());
    }
}
