//! Configuration Module
//!
//! Environment-sourced settings for the refresh binaries.

mod dotenv;
mod settings;

pub use dotenv::load_dotenv;
pub use settings::{
    AppConfig, BenchmarkConfig, ConfigError, ENV_API_BASE_URL, ENV_API_KEY, ENV_API_SECRET,
    ENV_DATA_DIR, ENV_HTTP_TIMEOUT_SECS, ENV_MAX_RETRIES,
};
