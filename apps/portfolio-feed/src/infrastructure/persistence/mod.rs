//! Persistence Adapters
//!
//! Implementations of `PersistencePort`.

pub mod error;
pub mod in_memory;
pub mod json_file;

pub use error::PersistenceError;
pub use in_memory::InMemorySink;
pub use json_file::JsonFileSink;
