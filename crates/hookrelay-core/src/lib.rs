//! Hookrelay Core Library
//!
//! This crate provides the domain models, error taxonomy, configuration, and
//! shared constants used by all relay crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{LogLevel, RelayError};
