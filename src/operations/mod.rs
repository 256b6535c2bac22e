pub mod query;

pub use query::{print_all, run_query};
