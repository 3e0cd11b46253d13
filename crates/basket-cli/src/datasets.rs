//! Dataset discovery.

use crate::error::{CliError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A CSV file of transactions found in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    /// Label derived from the file stem
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
}

impl Dataset {
    /// Describe a file as a dataset.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

/// List the `*.csv` files in `dir`, sorted by file name.
pub fn find_datasets(dir: &Path) -> Result<Vec<Dataset>> {
    if !dir.is_dir() {
        return Err(CliError::Dataset(format!("Data folder not found: {}", dir.display())));
    }

    let mut datasets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            datasets.push(Dataset::from_path(path));
        }
    }

    if datasets.is_empty() {
        return Err(CliError::Dataset(format!("No CSV files found under {}", dir.display())));
    }

    datasets.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    debug!(dir = %dir.display(), count = datasets.len(), "Discovered datasets");
    Ok(datasets)
}

/// Look a dataset up by label or file name.
pub fn find_by_name<'a>(datasets: &'a [Dataset], name: &str) -> Option<&'a Dataset> {
    datasets.iter().find(|dataset| {
        dataset.name == name || dataset.path.file_name().is_some_and(|file| file == name)
    })
}
