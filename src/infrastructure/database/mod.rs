pub mod connection;
pub mod queue_repo;
pub mod utils;

pub use connection::{create_pool, run_migrations, verify_connection, ConnectionError};
pub use queue_repo::SqlConversionQueue;
