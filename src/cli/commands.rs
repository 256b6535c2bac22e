use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Flags are independent; several may be combined and run in a fixed
/// order: create, ingest, eval, `select_all`, drop, `rm_db`.
#[derive(Parser, Debug)]
#[command(
    name = "sqlitexplorer",
    version,
    about = "Explore SQLite with file data stored in '$HOME/sqlitexplorer.sqlite3'",
    after_help = "The database is created as needed."
)]
pub struct Cli {
    /// Run SQL against the database and print each result row
    #[arg(short, long, value_name = "SQL")]
    pub eval: Option<String>,

    /// Log verbosity
    #[arg(short, long, value_name = "LEVEL")]
    pub debug: Option<LogLevel>,

    /// Use this database file instead of the default one
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Print rows as JSON arrays instead of tuples
    #[arg(long)]
    pub json: bool,

    /// CREATE TABLE IF NOT EXISTS fileinfo (filename TEXT, sha1sum TEXT)
    #[arg(long, help_heading = "SQLite3 Database")]
    pub create: bool,

    /// Read '<sha1sum> <filepath>' lines on STDIN for insert ('q' stops)
    #[arg(long = "from_stdin", visible_alias = "from-stdin", help_heading = "SQLite3 Database")]
    pub from_stdin: bool,

    /// Find filepaths under PATH and generate sha1sum for insert
    #[arg(
        long = "from_path",
        visible_alias = "from-path",
        value_name = "PATH",
        help_heading = "SQLite3 Database"
    )]
    pub from_path: Option<PathBuf>,

    /// SELECT rowid, sha1sum, filename FROM fileinfo
    #[arg(long = "select_all", visible_alias = "select-all", help_heading = "SQLite3 Database")]
    pub select_all: bool,

    /// DROP TABLE IF EXISTS fileinfo
    #[arg(long, help_heading = "SQLite3 Database")]
    pub drop: bool,

    /// Remove the database file if found
    #[arg(long = "rm_db", visible_alias = "rm-db", help_heading = "SQLite3 Database")]
    pub rm_db: bool,
}

impl Cli {
    /// Whether the table must exist before running the requested actions.
    #[must_use]
    pub fn needs_table(&self) -> bool {
        self.create
            || self.from_stdin
            || self.from_path.is_some()
            || self.select_all
            || self.eval.is_some()
    }

    /// Whether any ingest source was requested.
    #[must_use]
    pub fn ingests(&self) -> bool {
        self.from_stdin || self.from_path.is_some()
    }
}

/// Accepted `--debug` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Matching `tracing` level. `critical` has no counterpart and maps to ERROR.
    #[must_use]
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Critical => tracing::Level::ERROR,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sqlitexplorer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_needs_nothing() {
        let cli = parse(&[]);
        assert!(!cli.needs_table());
        assert!(!cli.ingests());
    }

    #[test]
    fn underscore_and_kebab_spellings() {
        let a = parse(&["--from_stdin", "--select_all", "--rm_db"]);
        let b = parse(&["--from-stdin", "--select-all", "--rm-db"]);
        assert!(a.from_stdin && a.select_all && a.rm_db);
        assert!(b.from_stdin && b.select_all && b.rm_db);
    }

    #[test]
    fn query_flags_imply_create() {
        assert!(parse(&["--from_path", "/tmp"]).needs_table());
        assert!(parse(&["-e", "SELECT 1"]).needs_table());
        assert!(parse(&["--select_all"]).needs_table());
        assert!(!parse(&["--drop"]).needs_table());
        assert!(!parse(&["--rm_db"]).needs_table());
    }

    #[test]
    fn debug_levels() {
        assert_eq!(parse(&["-d", "warning"]).debug, Some(LogLevel::Warning));
        assert_eq!(
            parse(&["--debug", "critical"]).debug.unwrap().as_tracing(),
            tracing::Level::ERROR
        );
        assert!(Cli::try_parse_from(["sqlitexplorer", "-d", "verbose"]).is_err());
    }
}
