//! Application Ports (Driven)
//!
//! Ports define how the refresh use cases reach external systems:
//! the account data provider, the benchmark data provider and the
//! persistence sink.

mod account_data_port;
mod benchmark_data_port;
mod persistence_port;

pub use account_data_port::{AccountDataError, AccountDataPort, HistoryQuery, OrderQuery};
pub use benchmark_data_port::{BenchmarkDataError, BenchmarkDataPort};
pub use persistence_port::{PersistencePort, SinkError};

#[cfg(test)]
pub use account_data_port::MockAccountDataPort;
#[cfg(test)]
pub use benchmark_data_port::MockBenchmarkDataPort;
#[cfg(test)]
pub use persistence_port::MockPersistencePort;
