// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::io::{self, BufWriter, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sqlitexplorer::cli::commands::{Cli, LogLevel};
use sqlitexplorer::cli::output::{self, RowFormat};
use sqlitexplorer::config::Config;
use sqlitexplorer::db::Database;
use sqlitexplorer::error::Result;
use sqlitexplorer::indexer;
use sqlitexplorer::operations;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(&cli) {
        // Reader closed stdout: anything still buffered is discarded.
        if !e.is_broken_pipe() {
            eprintln!("{}", output::format_error(&e));
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries query rows.
fn init_tracing(level: Option<LogLevel>) {
    let directive = level.map_or(tracing::Level::WARN, LogLevel::as_tracing);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();

    if let Some(level) = level {
        info!("Debug level: {}", level.as_str());
    }
}

fn get_config(cli: &Cli) -> Result<Config> {
    match &cli.database {
        Some(path) => Ok(Config::new(path)),
        None => Config::from_home(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = get_config(cli)?;
    let format = RowFormat::from_json_flag(cli.json);
    let mut out = BufWriter::new(io::stdout().lock());

    let mut db = Database::open(&config.db_path)?;

    if cli.needs_table() {
        db.ensure_schema()?;
    }

    if cli.ingests() {
        let stream = cli.from_stdin.then(|| io::stdin().lock());
        indexer::run_ingest(&mut db, stream, cli.from_path.as_deref())?;
    }

    if let Some(sql) = &cli.eval {
        operations::run_query(&db, sql, format, &mut out)?;
    }

    if cli.select_all {
        operations::print_all(&db, format, &mut out)?;
    }

    if cli.drop {
        db.drop_schema()?;
        info!("table dropped");
    }

    db.close()?;

    if cli.rm_db && config.remove_db()? {
        info!(path = %config.db_path.display(), "database removed");
    }

    out.flush()?;
    Ok(())
}
