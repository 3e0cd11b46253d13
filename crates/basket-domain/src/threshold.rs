//! Threshold validation
//!
//! Both thresholds live in (0, 1]. Values are checked explicitly against the
//! interval bounds; NaN and infinities never pass.

use crate::error::{MiningError, Result};

/// Validate a minimum support threshold.
pub fn validate_support(value: f64) -> Result<f64> {
    if in_unit_interval(value) {
        Ok(value)
    } else {
        Err(MiningError::InvalidSupport(value))
    }
}

/// Validate a minimum confidence threshold.
pub fn validate_confidence(value: f64) -> Result<f64> {
    if in_unit_interval(value) {
        Ok(value)
    } else {
        Err(MiningError::InvalidConfidence(value))
    }
}

fn in_unit_interval(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= 1.0
}
