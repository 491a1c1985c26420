//! Alpaca Markets Account Data Adapter
//!
//! Implementation of `AccountDataPort` for the Alpaca trading REST API with:
//! - Header-based key/secret authentication
//! - Retry logic with exponential backoff
//! - Paper vs live environment detection from the base URL

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::AlpacaAccountAdapter;
pub use config::{AlpacaConfig, AlpacaEnvironment};
pub use error::AlpacaError;
pub use http_client::AlpacaHttpClient;
