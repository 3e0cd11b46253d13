//! Datasets command implementation.

use crate::config::Config;
use crate::datasets::find_datasets;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the datasets command.
pub fn execute_datasets(config: &Config, formatter: &Formatter) -> Result<()> {
    let datasets = find_datasets(&config.data_dir)?;
    println!("{}", formatter.format_datasets(&datasets)?);
    Ok(())
}
