//! Transaction loading from comma-separated files.
//!
//! One basket per line, no header. Labels are trimmed and empty labels
//! dropped; lines left with no labels are skipped.

use crate::error::{CliError, Result};
use basket_domain::Transaction;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse transactions from file contents.
pub fn parse_transactions(contents: &str) -> Vec<Transaction> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    let mut blank = 0;
    let transactions: Vec<Transaction> = contents
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            if line.trim().is_empty() {
                blank += 1;
                return None;
            }
            let items: Vec<&str> = line
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect();
            if items.is_empty() {
                warn!(line = index + 1, content = line, "Skipped line without item labels");
                None
            } else {
                Some(Transaction::new(items))
            }
        })
        .collect();

    if blank > 0 {
        debug!(blank, "Skipped blank lines");
    }
    transactions
}

/// Load transactions from a file.
///
/// Fails if the file cannot be read or yields no transactions.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let contents = fs::read_to_string(path).map_err(|e| CliError::Load {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let transactions = parse_transactions(&contents);
    if transactions.is_empty() {
        return Err(CliError::Load {
            path: path.display().to_string(),
            reason: "No transactions found".to_string(),
        });
    }

    debug!(path = %path.display(), transactions = transactions.len(), "Loaded transactions");
    Ok(transactions)
}

/// Check that loaded transactions are worth mining.
///
/// Rules need at least two distinct items to exist.
pub fn sanity_check(transactions: &[Transaction]) -> Result<()> {
    if transactions.is_empty() {
        return Err(CliError::Validation("Loaded zero transactions.".to_string()));
    }

    let distinct: BTreeSet<&str> = transactions.iter().flat_map(Transaction::iter).collect();
    if distinct.len() < 2 {
        return Err(CliError::Validation(
            "Dataset must contain at least 2 distinct items.".to_string(),
        ));
    }
    Ok(())
}
