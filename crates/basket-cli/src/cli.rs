//! CLI command definitions and argument parsing.

use crate::threshold::parse_threshold_arg;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Basket - Mine frequent itemsets and association rules from basket data.
#[derive(Debug, Parser)]
#[command(name = "basket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BASKET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Plain text
    Plain,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mine a dataset non-interactively
    Mine(MineArgs),

    /// List datasets in the data directory
    Datasets,

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Pick a dataset and thresholds from prompts (default)
    Interactive,
}

/// Arguments for the mine command.
#[derive(Debug, Parser)]
pub struct MineArgs {
    /// Transaction file (one comma-separated basket per line)
    #[arg(short = 'i', long = "file", conflicts_with = "dataset")]
    pub file: Option<PathBuf>,

    /// Dataset name from the data directory
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Minimum support (0.2, 20 or 20%)
    #[arg(long, visible_alias = "minsup", value_parser = parse_threshold_arg)]
    pub min_support: Option<f64>,

    /// Minimum confidence (0.6, 60 or 60%)
    #[arg(long, visible_alias = "minconf", value_parser = parse_threshold_arg)]
    pub min_confidence: Option<f64>,

    /// Print at most this many rules
    #[arg(short, long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub top: Option<usize>,

    /// Largest itemset size to search for
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Count every joined candidate instead of pruning by subsets first
    #[arg(long)]
    pub no_prune: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Plain => crate::config::OutputFormat::Plain,
        }
    }
}
