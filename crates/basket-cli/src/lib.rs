//! Basket CLI library.
//!
//! Everything around the mining core: loading transaction files, parsing
//! thresholds, discovering datasets, configuration, and rendering reports.

pub mod cli;
pub mod commands;
pub mod config;
pub mod datasets;
pub mod error;
pub mod interactive;
pub mod loader;
pub mod output;
pub mod report;
pub mod threshold;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
