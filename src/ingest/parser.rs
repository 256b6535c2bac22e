use crate::error::{ExplorerError, Result};

/// Input line that ends stream ingest early (interactive quitting).
pub const STOP_SENTINEL: &str = "q";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// A `<digest> <path>` pair.
    Entry { digest: &'a str, path: &'a str },
    /// The stop sentinel was read.
    Stop,
}

/// Parse one `<digest> <path>` line.
///
/// Surrounding whitespace is stripped. The digest is the first token; the
/// path is everything after the following whitespace run, internal spaces
/// kept. `line_no` is only used for the error.
pub fn parse_line(line: &str, line_no: usize) -> Result<ParsedLine<'_>> {
    let line = line.trim();
    if line == STOP_SENTINEL {
        return Ok(ParsedLine::Stop);
    }
    match line.split_once(char::is_whitespace) {
        Some((digest, rest)) => Ok(ParsedLine::Entry {
            digest,
            path: rest.trim_start(),
        }),
        None => Err(ExplorerError::MalformedLine {
            line_no,
            line: line.to_owned(),
        }),
    }
}
