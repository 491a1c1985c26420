//! Infrastructure layer - Adapters and external integrations.
//!
//! - `alpaca`: account data over the Alpaca trading REST API
//! - `yahoo`: benchmark closes over the Yahoo Finance chart API
//! - `persistence`: JSON file and in-memory sinks
//! - `config`: environment-sourced configuration
//! - `http`: retry policy shared by the HTTP adapters

pub mod alpaca;
pub mod config;
pub mod http;
pub mod persistence;
pub mod yahoo;
