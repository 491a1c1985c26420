//! Domain layer.
//!
//! Pure types and calculations with no I/O:
//! - `performance`: equity series and derived performance metrics
//! - `benchmark`: market index identifiers and close-price points

pub mod benchmark;
pub mod performance;
