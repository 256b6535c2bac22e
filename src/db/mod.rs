pub mod batch;
pub mod connection;
pub mod queries;
pub mod schema;

pub use batch::IngestBatch;
pub use connection::Database;
