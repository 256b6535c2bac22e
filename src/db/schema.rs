/// The single table holding file records.
pub const TABLE_NAME: &str = "fileinfo";

// rowid is implicit; AUTOINCREMENT is slower and not needed.
pub const CREATE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS fileinfo (
    filename TEXT,
    sha1sum TEXT
)";

pub const INSERT_ROW: &str = "INSERT INTO fileinfo (sha1sum, filename) VALUES (?1, ?2)";

pub const SELECT_ALL: &str = "SELECT rowid, sha1sum, filename FROM fileinfo";

pub const COUNT_ROWS: &str = "SELECT COUNT(*) FROM fileinfo";

pub const DROP_TABLE: &str = "DROP TABLE IF EXISTS fileinfo";

pub const TABLE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";
