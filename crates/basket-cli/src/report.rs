//! A single mining run: load, mine, derive rules.

use crate::datasets::Dataset;
use crate::error::{CliError, Result};
use crate::loader::{load_transactions, sanity_check};
use basket_domain::{
    generate_rules, validate_confidence, validate_support, FrequentItemsets, ItemsetMiner, LevelwiseMiner,
    MinerConfig, Rule,
};
use std::path::PathBuf;
use tracing::info;

/// Everything needed to run the miner over one dataset.
#[derive(Debug, Clone)]
pub struct MiningRequest {
    /// Dataset to mine
    pub dataset: Dataset,
    /// Minimum support in (0, 1]
    pub min_support: f64,
    /// Minimum confidence in (0, 1]
    pub min_confidence: f64,
    /// Miner settings
    pub miner: MinerConfig,
    /// Print at most this many rules
    pub top_rules: Option<usize>,
}

/// Outcome of a mining run, ready for rendering.
#[derive(Debug, Clone)]
pub struct MiningReport {
    /// Dataset label
    pub label: String,
    /// Source file
    pub path: PathBuf,
    /// Minimum support used
    pub min_support: f64,
    /// Minimum confidence used
    pub min_confidence: f64,
    /// Frequent itemsets with supports
    pub frequent: FrequentItemsets,
    /// All rules, ranked
    pub rules: Vec<Rule>,
    /// Print at most this many rules
    pub top_rules: Option<usize>,
}

impl MiningReport {
    /// Number of transactions mined.
    pub fn transaction_count(&self) -> usize {
        self.frequent.transaction_count()
    }

    /// Rules to display, honoring the top-N cap.
    pub fn displayed_rules(&self) -> &[Rule] {
        match self.top_rules {
            Some(n) => &self.rules[..n.min(self.rules.len())],
            None => &self.rules,
        }
    }
}

/// Run the miner and rule generator for a request.
///
/// Thresholds and miner settings are validated before the file is read.
pub fn run(request: &MiningRequest) -> Result<MiningReport> {
    validate_support(request.min_support)?;
    validate_confidence(request.min_confidence)?;
    request.miner.validate()?;
    if request.top_rules == Some(0) {
        return Err(CliError::InvalidInput("Rule limit must be at least 1".to_string()));
    }

    let transactions = load_transactions(&request.dataset.path)?;
    sanity_check(&transactions)?;

    info!(
        dataset = %request.dataset.name,
        transactions = transactions.len(),
        min_support = request.min_support,
        min_confidence = request.min_confidence,
        "Mining dataset"
    );

    let frequent = LevelwiseMiner::new(request.miner).mine(&transactions, request.min_support)?;
    let rules = generate_rules(&frequent, request.min_confidence)?;

    Ok(MiningReport {
        label: request.dataset.name.clone(),
        path: request.dataset.path.clone(),
        min_support: request.min_support,
        min_confidence: request.min_confidence,
        frequent,
        rules,
        top_rules: request.top_rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_domain::MiningError;

    #[test]
    fn test_thresholds_checked_before_reading() {
        let request = MiningRequest {
            dataset: Dataset::from_path("/definitely/not/here.csv"),
            min_support: 1.5,
            min_confidence: 0.5,
            miner: MinerConfig::default(),
            top_rules: None,
        };
        let err = run(&request).unwrap_err();
        assert!(matches!(err, CliError::Mining(MiningError::InvalidSupport(_))));
    }

    #[test]
    fn test_zero_rule_limit_rejected() {
        let request = MiningRequest {
            dataset: Dataset::from_path("/definitely/not/here.csv"),
            min_support: 0.5,
            min_confidence: 0.5,
            miner: MinerConfig::default(),
            top_rules: Some(0),
        };
        assert!(matches!(run(&request), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let request = MiningRequest {
            dataset: Dataset::from_path("/definitely/not/here.csv"),
            min_support: 0.5,
            min_confidence: 0.5,
            miner: MinerConfig::default(),
            top_rules: None,
        };
        assert!(matches!(run(&request), Err(CliError::Load { .. })));
    }
}
