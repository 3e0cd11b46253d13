//! Interactive mode: pick a dataset and thresholds from prompts.

use crate::config::Config;
use crate::datasets::{find_datasets, Dataset};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::report::{self, MiningRequest};
use crate::threshold::parse_threshold;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive dataset menu and mine the chosen dataset.
pub fn run_interactive(config: &Config, formatter: &Formatter) -> Result<()> {
    let datasets = find_datasets(&config.data_dir)?;

    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e))))?;

    println!("{}", formatter.info("Market-Basket Miner"));
    println!("{}", formatter.format_datasets(&datasets)?);

    let dataset = prompt_dataset(&mut editor, &datasets, formatter)?;
    let min_support = prompt_threshold(&mut editor, "Minimum Support", formatter)?;
    let min_confidence = prompt_threshold(&mut editor, "Minimum Confidence", formatter)?;

    let request = MiningRequest {
        dataset: dataset.clone(),
        min_support,
        min_confidence,
        miner: config.miner_config(),
        top_rules: config.settings.top_rules,
    };

    let report = report::run(&request)?;
    println!();
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

/// Parse a 1-based menu choice into an index.
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    if (1..=count).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

fn prompt_dataset<'a>(
    editor: &mut DefaultEditor,
    datasets: &'a [Dataset],
    formatter: &Formatter,
) -> Result<&'a Dataset> {
    let prompt = format!("Select dataset (1-{}): ", datasets.len());
    loop {
        let line = read_line(editor, &prompt)?;
        match parse_selection(&line, datasets.len()) {
            Some(index) => return Ok(&datasets[index]),
            None => eprintln!(
                "{}",
                formatter.warning("Invalid choice. Please enter a valid number from the list.")
            ),
        }
    }
}

fn prompt_threshold(editor: &mut DefaultEditor, label: &str, formatter: &Formatter) -> Result<f64> {
    let prompt = format!("{} (e.g., 0.2 or 20%): ", label);
    loop {
        let line = read_line(editor, &prompt)?;
        match parse_threshold(&line) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("{}", formatter.warning(&e.to_string())),
        }
    }
}

fn read_line(editor: &mut DefaultEditor, prompt: &str) -> Result<String> {
    match editor.readline(prompt) {
        Ok(line) => Ok(line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(CliError::Cancelled),
        Err(e) => Err(CliError::Io(std::io::Error::other(e.to_string()))),
    }
}
