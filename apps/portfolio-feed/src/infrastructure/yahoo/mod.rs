//! Yahoo Finance Benchmark Adapter
//!
//! Implementation of `BenchmarkDataPort` over the public chart endpoint
//! (`/v8/finance/chart/{symbol}`), returning daily index closes.

mod adapter;
mod api_types;
mod config;
mod error;

pub use adapter::YahooBenchmarkAdapter;
pub use config::YahooConfig;
pub use error::YahooError;
