//! Application Use Cases
//!
//! Each use case runs one data-refresh cycle end to end: fetch from the
//! provider ports, derive what the dashboard needs, persist the document.

mod error;
mod refresh_benchmarks;
mod refresh_portfolio;

pub use error::RefreshError;
pub use refresh_benchmarks::RefreshBenchmarksUseCase;
pub use refresh_portfolio::RefreshPortfolioUseCase;
