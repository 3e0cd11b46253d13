//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::datasets::Dataset;
use crate::error::Result;
use crate::report::MiningReport;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a full mining report.
    pub fn format_report(&self, report: &MiningReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Plain => Ok(self.format_report_plain(report)),
        }
    }

    /// Format a mining report as JSON.
    fn format_report_json(&self, report: &MiningReport) -> Result<String> {
        let frequent = &report.frequent;

        let itemsets: Vec<serde_json::Value> = frequent
            .sorted()
            .into_iter()
            .map(|(itemset, support)| {
                serde_json::json!({
                    "items": itemset.items(),
                    "size": itemset.len(),
                    "count": frequent.count_for(support),
                    "support": support
                })
            })
            .collect();

        let rules: Vec<serde_json::Value> = report
            .displayed_rules()
            .iter()
            .enumerate()
            .map(|(idx, rule)| {
                serde_json::json!({
                    "rank": idx + 1,
                    "antecedent": rule.antecedent.items(),
                    "consequent": rule.consequent.items(),
                    "count": frequent.count_for(rule.support),
                    "support": rule.support,
                    "confidence": rule.confidence
                })
            })
            .collect();

        let value = serde_json::json!({
            "dataset": report.label,
            "path": report.path.display().to_string(),
            "transactions": report.transaction_count(),
            "min_support": report.min_support,
            "min_confidence": report.min_confidence,
            "itemsets": itemsets,
            "rules": rules,
            "total_rules": report.rules.len()
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format a mining report as tables, one per itemset size plus the rules.
    fn format_report_table(&self, report: &MiningReport) -> String {
        let frequent = &report.frequent;
        let mut sections = vec![self.colorize(&self.header(report), "cyan")];

        if frequent.is_empty() {
            sections.push(String::new());
            sections.push(self.warning("No frequent itemsets at this support."));
        }

        for (k, entries) in frequent.by_size() {
            let mut builder = Builder::default();
            builder.push_record(["Itemset", "Count", "Support"]);
            for (itemset, support) in entries {
                builder.push_record([
                    itemset.to_string(),
                    frequent.count_for(support).to_string(),
                    percent(support),
                ]);
            }

            sections.push(String::new());
            sections.push(self.colorize(&level_heading(k), "magenta"));
            sections.push(self.render_table(builder));
        }

        sections.push(String::new());
        sections.push(self.colorize("Final Association Rules (A -> B):", "magenta"));

        let displayed = report.displayed_rules();
        if displayed.is_empty() {
            sections.push(self.warning("No rules at these thresholds."));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["#", "Antecedent", "Consequent", "Support", "Count", "Confidence"]);
            for (idx, rule) in displayed.iter().enumerate() {
                builder.push_record([
                    (idx + 1).to_string(),
                    rule.antecedent.to_string(),
                    rule.consequent.to_string(),
                    percent(rule.support),
                    frequent.count_for(rule.support).to_string(),
                    percent(rule.confidence),
                ]);
            }
            sections.push(self.render_table(builder));
        }

        if let Some(note) = truncation_note(report) {
            sections.push(self.info(&note));
        }

        sections.join("\n")
    }

    /// Format a mining report as plain text.
    fn format_report_plain(&self, report: &MiningReport) -> String {
        let frequent = &report.frequent;
        let mut lines = vec![self.header(report)];

        for (k, entries) in frequent.by_size() {
            lines.push(String::new());
            lines.push(level_heading(k));
            for (itemset, support) in entries {
                lines.push(format!(
                    "{} | count={} | support={}",
                    itemset,
                    frequent.count_for(support),
                    percent(support)
                ));
            }
        }

        lines.push(String::new());
        lines.push("Final Association Rules (A -> B):".to_string());

        let displayed = report.displayed_rules();
        if displayed.is_empty() {
            lines.push("No rules at these thresholds.".to_string());
        }
        for (idx, rule) in displayed.iter().enumerate() {
            lines.push(format!("Rule {}: {}", idx + 1, rule));
            lines.push(format!(
                "  Support: {} (count={})  Confidence: {}",
                percent(rule.support),
                frequent.count_for(rule.support),
                percent(rule.confidence)
            ));
        }

        if let Some(note) = truncation_note(report) {
            lines.push(note);
        }

        lines.join("\n")
    }

    /// Format the dataset menu.
    pub fn format_datasets(&self, datasets: &[Dataset]) -> Result<String> {
        if let OutputFormat::Json = self.format {
            return Ok(serde_json::to_string_pretty(datasets)?);
        }

        let lines: Vec<String> = datasets
            .iter()
            .enumerate()
            .map(|(idx, dataset)| {
                let file = dataset
                    .path
                    .file_name()
                    .map(|file| file.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dataset.name.clone());
                format!("{}. {}", idx + 1, file)
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn header(&self, report: &MiningReport) -> String {
        format!(
            "Store: {} | file={} | transactions={} | minsup={} | minconf={}",
            report.label,
            report.path.display(),
            report.transaction_count(),
            percent(report.min_support),
            percent(report.min_confidence)
        )
    }

    fn render_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a fraction as a percentage with two decimals.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// "Showing N of M rules" when the top-N cap hid some rules.
fn truncation_note(report: &MiningReport) -> Option<String> {
    let shown = report.displayed_rules().len();
    (shown < report.rules.len()).then(|| format!("Showing {} of {} rules", shown, report.rules.len()))
}

fn level_heading(k: usize) -> String {
    format!("L{} (frequent {}-itemsets):", k, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_domain::{generate_rules, mine_frequent_itemsets, Transaction};
    use std::path::PathBuf;

    fn create_test_report(top_rules: Option<usize>) -> MiningReport {
        let transactions = vec![
            Transaction::new(["a", "b"]),
            Transaction::new(["a", "b", "c"]),
            Transaction::new(["a"]),
            Transaction::new(["b", "c"]),
        ];
        let frequent = mine_frequent_itemsets(&transactions, 0.5).unwrap();
        let rules = generate_rules(&frequent, 0.6).unwrap();
        MiningReport {
            label: "shop".to_string(),
            path: PathBuf::from("data/shop.csv"),
            min_support: 0.5,
            min_confidence: 0.6,
            frequent,
            rules,
            top_rules,
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.5), "50.00%");
        assert_eq!(percent(2.0 / 3.0), "66.67%");
    }

    #[test]
    fn test_plain_format() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_report(&create_test_report(None)).unwrap();

        assert!(output.starts_with("Store: shop | file=data/shop.csv | transactions=4 | minsup=50.00% | minconf=60.00%"));
        assert!(output.contains("L1 (frequent 1-itemsets):\n{a} | count=3 | support=75.00%"));
        assert!(output.contains("L2 (frequent 2-itemsets):\n{a, b} | count=2 | support=50.00%\n{b, c} |"));
        assert!(output.contains("Rule 1: {c} -> {b}\n  Support: 50.00% (count=2)  Confidence: 100.00%"));
        assert!(output.contains("Rule 4: {b} -> {c}"));
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&create_test_report(None)).unwrap();
        assert!(output.contains("Itemset"));
        assert!(output.contains("Confidence"));
        assert!(output.contains("66.67%"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&create_test_report(None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["transactions"], 4);
        assert_eq!(value["itemsets"].as_array().unwrap().len(), 5);
        assert_eq!(value["rules"][0]["antecedent"][0], "c");
        assert_eq!(value["rules"][0]["confidence"], 1.0);
        assert_eq!(value["total_rules"], 4);
    }

    #[test]
    fn test_top_rules_cap() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_report(&create_test_report(Some(2))).unwrap();
        assert!(output.contains("Rule 2:"));
        assert!(!output.contains("Rule 3:"));
        assert!(output.ends_with("Showing 2 of 4 rules"));
        assert!(!output.contains("No rules at these thresholds."));
    }

    #[test]
    fn test_uncapped_report_has_no_truncation_note() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let output = formatter.format_report(&create_test_report(Some(4))).unwrap();
        assert!(output.contains("Rule 4:"));
        assert!(!output.contains("Showing"));
    }

    #[test]
    fn test_error_message() {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        assert_eq!(formatter.error("Error: bad input"), "✗ Error: bad input");
    }

    #[test]
    fn test_no_rules_message() {
        let mut report = create_test_report(None);
        report.rules.clear();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&report).unwrap();
        assert!(output.contains("No rules at these thresholds."));
    }

    #[test]
    fn test_dataset_menu() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let datasets = vec![Dataset::from_path("data/a.csv"), Dataset::from_path("data/b.csv")];
        assert_eq!(formatter.format_datasets(&datasets).unwrap(), "1. a.csv\n2. b.csv");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
