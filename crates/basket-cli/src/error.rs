//! Error types for the CLI application.

use basket_domain::MiningError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset discovery error
    #[error("{0}")]
    Dataset(String),

    /// Transaction file could not be read or held no transactions
    #[error("Failed to load '{path}': {reason}")]
    Load {
        /// File that failed to load
        path: String,
        /// What went wrong
        reason: String,
    },

    /// Loaded transactions are unusable for mining
    #[error("Validation error: {0}")]
    Validation(String),

    /// Mining or rule generation rejected its input
    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// User cancelled an interactive prompt
    #[error("Cancelled.")]
    Cancelled,
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Dataset(_) => 2,
            CliError::Load { .. } | CliError::Validation(_) => 3,
            CliError::Mining(MiningError::InvalidConfidence(_)) => 5,
            CliError::Mining(_) => 4,
            CliError::Cancelled => 130,
            _ => 1,
        }
    }
}
