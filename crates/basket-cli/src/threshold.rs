//! Threshold input parsing.
//!
//! Accepts a fraction (`0.2`), a bare percentage (`20`) or an explicit
//! percentage (`20%`), and normalizes to a value in (0, 1].

use crate::error::{CliError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Unsigned decimal with an optional trailing `%`, surrounding blanks allowed.
static THRESHOLD_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]*\.?[0-9]+|[0-9]+\.)\s*(%?)\s*$").ok());

/// Parse a user-supplied support or confidence threshold.
///
/// Bare numbers greater than 1 are read as percentages. A trailing `%`
/// always means a percentage, so `0.5%` is 0.005.
///
/// # Examples
///
/// ```
/// use basket_cli::threshold::parse_threshold;
///
/// assert_eq!(parse_threshold("0.2").unwrap(), 0.2);
/// assert_eq!(parse_threshold("20").unwrap(), 0.2);
/// assert_eq!(parse_threshold(" 20 % ").unwrap(), 0.2);
/// assert!(parse_threshold("0").is_err());
/// ```
pub fn parse_threshold(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let invalid = || CliError::InvalidInput(format!("'{}' is not a number like 0.2 or 20%", trimmed));

    let captures = THRESHOLD_RE
        .as_ref()
        .and_then(|re| re.captures(raw))
        .ok_or_else(invalid)?;
    let explicit_percent = !captures[2].is_empty();
    let value: f64 = captures[1].parse().map_err(|_| invalid())?;

    let value = if explicit_percent || value > 1.0 {
        value / 100.0
    } else {
        value
    };

    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(CliError::InvalidInput(format!(
            "Value must be within (0, 1], got '{}'",
            trimmed
        )))
    }
}

/// clap value parser wrapper around [`parse_threshold`].
pub fn parse_threshold_arg(raw: &str) -> std::result::Result<f64, String> {
    parse_threshold(raw).map_err(|e| e.to_string())
}
