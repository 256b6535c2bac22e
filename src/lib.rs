// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - cast_possible_truncation: Row counts come from SQLite i64 and never exceed usize
// - cast_sign_loss: COUNT(*) is never negative
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - module_name_repetitions: cli::commands::Cli reads better than the alternative
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod indexer;
pub mod ingest;
pub mod models;
pub mod operations;
