//! HTTP retry policy shared by the provider adapters.

mod retry;

pub use retry::{ErrorCategory, ExponentialBackoff, RetryConfig, categorize_status};
