//! `dbping` - MySQL connectivity checks with real server diagnostics
//!
//! This library opens a single connection against a MySQL server and, when the
//! attempt fails, captures the three fields the server reports: the error
//! message, the SQLSTATE classification and the vendor-specific numeric code.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Command line interface for dbping
pub mod cli;
/// Command handlers for the CLI
pub mod commands;
/// Configuration management for dbping
pub mod config;
pub mod error;
pub mod params;
pub mod probe;

pub use config::Config;
pub use error::ConnectError;
pub use params::ConnectionParams;
pub use probe::{Probe, ProbeReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
