//! Numeric input validation
//!
//! Small per-field guards: each returns the checked value or a field-tagged
//! [`InputError`] naming exactly which input failed and why. Callers decide
//! how to surface the message.

use crate::error::{InputError, Result};

/// Require a finite value (rejects NaN and both infinities).
pub fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { field, value })
    }
}

/// Require a finite value strictly greater than zero.
pub fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    let value = require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NotPositive { field, value })
    }
}

/// Require a finite rate of zero or greater. Zero is allowed: exempt goods
/// carry a 0% rate.
pub fn require_rate(field: &'static str, value: f64) -> Result<f64> {
    let value = require_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(InputError::NegativeRate { field, value })
    }
}
