//! Mining error types

use thiserror::Error;

/// Result type alias for mining operations.
pub type Result<T> = std::result::Result<T, MiningError>;

/// Errors raised by the miner and the rule generator.
///
/// Every variant is detected before any scanning begins, so a failed call
/// never leaves partial output behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    /// Minimum support outside (0, 1] or not a finite number
    #[error("Minimum support must be a number in (0, 1], got {0}")]
    InvalidSupport(f64),

    /// Minimum confidence outside (0, 1] or not a finite number
    #[error("Minimum confidence must be a number in (0, 1], got {0}")]
    InvalidConfidence(f64),

    /// Maximum itemset length of zero
    #[error("Maximum itemset length must be at least 1")]
    InvalidMaxLen,

    /// No transactions to mine; support is undefined
    #[error("Cannot mine an empty transaction collection")]
    EmptyTransactions,
}

impl MiningError {
    /// Whether this error stems from a threshold or miner setting rather than
    /// from the transaction input.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, MiningError::EmptyTransactions)
    }
}
