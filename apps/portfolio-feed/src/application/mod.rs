//! Application layer.
//!
//! - `ports`: interfaces for the account, benchmark and persistence collaborators
//! - `use_cases`: the portfolio and benchmark refresh cycles
//! - `dto`: documents written for the dashboard

pub mod dto;
pub mod ports;
pub mod use_cases;
