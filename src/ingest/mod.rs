pub mod hasher;
pub mod parser;
pub mod walker;

pub use parser::{parse_line, ParsedLine};
pub use walker::Walker;
