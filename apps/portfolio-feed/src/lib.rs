// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Portfolio Feed - Dashboard Data Refresh
//!
//! Pulls account data from Alpaca and index closes from Yahoo Finance,
//! derives performance metrics and writes JSON documents for a dashboard.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure calculations and types
//!   - `performance`: equity series, total/annualized return, Sharpe ratio
//!   - `benchmark`: tracked indices and daily close points
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `AccountDataPort`, `BenchmarkDataPort`, `PersistencePort`
//!   - `use_cases`: `RefreshPortfolio`, `RefreshBenchmarks`
//!   - `dto`: documents written for the dashboard
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `alpaca`: account data over the Alpaca trading API
//!   - `yahoo`: index closes over the Yahoo Finance chart API
//!   - `persistence`: JSON file and in-memory sinks
//!   - `config`: environment-sourced settings

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core calculations with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Tracing subscriber setup for the binaries.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::benchmark::{BenchmarkIndex, BenchmarkPoint};
pub use domain::performance::{
    EquitySample, EquitySeries, PerformanceMetrics, compute_history_metrics, compute_metrics,
};

// Application re-exports
pub use application::dto::{BenchmarkDocument, PortfolioDocument};
pub use application::ports::{
    AccountDataError, AccountDataPort, BenchmarkDataError, BenchmarkDataPort, PersistencePort,
    SinkError,
};
pub use application::use_cases::{RefreshBenchmarksUseCase, RefreshError, RefreshPortfolioUseCase};

// Infrastructure re-exports
pub use infrastructure::alpaca::{AlpacaAccountAdapter, AlpacaConfig, AlpacaEnvironment, AlpacaError};
pub use infrastructure::config::{AppConfig, BenchmarkConfig, ConfigError};
pub use infrastructure::persistence::{InMemorySink, JsonFileSink};
pub use infrastructure::yahoo::{YahooBenchmarkAdapter, YahooConfig, YahooError};
