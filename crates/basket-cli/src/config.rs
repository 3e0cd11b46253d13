//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use basket_domain::{validate_confidence, validate_support, MinerConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for `*.csv` datasets
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Default thresholds when none are given on the command line
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Miner settings
    #[serde(default)]
    pub mining: MiningSettings,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Default mining thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum support in (0, 1]
    #[serde(default = "default_min_support")]
    pub min_support: f64,

    /// Minimum confidence in (0, 1]
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

/// Miner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningSettings {
    /// Skip candidates with an infrequent subset before counting
    #[serde(default = "default_true")]
    pub prune_candidates: bool,

    /// Largest itemset size to search for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Print at most this many rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_rules: Option<usize>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Plain line-oriented text
    Plain,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".basket").join("config.toml"))
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.settings.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Miner configuration derived from the settings.
    pub fn miner_config(&self) -> MinerConfig {
        MinerConfig {
            prune_candidates: self.mining.prune_candidates,
            max_len: self.mining.max_len,
        }
    }
}

impl Thresholds {
    /// Check both thresholds lie in (0, 1].
    pub fn validate(&self) -> Result<()> {
        validate_support(self.min_support)?;
        validate_confidence(self.min_confidence)?;
        Ok(())
    }
}

impl Settings {
    /// Reject a rule cap of zero, which would hide every rule.
    pub fn validate(&self) -> Result<()> {
        if self.top_rules == Some(0) {
            return Err(CliError::Config("top_rules must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            thresholds: Thresholds::default(),
            mining: MiningSettings::default(),
            settings: Settings::default(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_support: default_min_support(),
            min_confidence: default_min_confidence(),
        }
    }
}

impl Default for MiningSettings {
    fn default() -> Self {
        Self {
            prune_candidates: true,
            max_len: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            top_rules: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_min_support() -> f64 {
    0.2
}

fn default_min_confidence() -> f64 {
    0.5
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
