//! Mine command implementation.

use crate::cli::MineArgs;
use crate::config::Config;
use crate::datasets::{find_by_name, find_datasets, Dataset};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::report::{self, MiningRequest};
use basket_domain::MinerConfig;

/// Execute the mine command.
pub fn execute_mine(args: MineArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let request = build_request(args, config)?;
    let report = report::run(&request)?;
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

/// Resolve command-line arguments against the configuration.
///
/// Anything not given on the command line falls back to the config file.
pub fn build_request(args: MineArgs, config: &Config) -> Result<MiningRequest> {
    let dataset = match (args.file, args.dataset) {
        (Some(file), _) => Dataset::from_path(file),
        (None, Some(name)) => {
            let datasets = find_datasets(&config.data_dir)?;
            find_by_name(&datasets, &name)
                .cloned()
                .ok_or_else(|| CliError::Dataset(format!("No dataset named '{}' in {}", name, config.data_dir.display())))?
        }
        (None, None) => {
            return Err(CliError::InvalidInput(
                "Specify a transaction file with --file or a dataset with --dataset".to_string(),
            ))
        }
    };

    if args.min_support.is_none() || args.min_confidence.is_none() {
        config.thresholds.validate()?;
    }

    Ok(MiningRequest {
        dataset,
        min_support: args.min_support.unwrap_or(config.thresholds.min_support),
        min_confidence: args.min_confidence.unwrap_or(config.thresholds.min_confidence),
        miner: MinerConfig {
            prune_candidates: config.mining.prune_candidates && !args.no_prune,
            max_len: args.max_len.or(config.mining.max_len),
        },
        top_rules: args.top.or(config.settings.top_rules),
    })
}
