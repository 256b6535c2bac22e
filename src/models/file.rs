use serde::Serialize;

/// A (digest, path) row stored in the index database.
///
/// Rows are never updated; the id is the store's `rowid`. Serializes with
/// the table's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// `SQLite` rowid.
    #[serde(rename = "rowid")]
    pub id: i64,
    /// Hex digest of file contents (SHA-1 when produced by the walker).
    #[serde(rename = "sha1sum")]
    pub digest: String,
    /// File path as it was ingested. Not required to exist or be unique.
    #[serde(rename = "filename")]
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_column_names() {
        let record = FileRecord {
            id: 4,
            digest: "abc123".into(),
            path: "/tmp/a b.txt".into(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"rowid":4,"sha1sum":"abc123","filename":"/tmp/a b.txt"}"#
        );
    }
}
