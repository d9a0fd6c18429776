//! Caller-owned form state
//!
//! The calculators are pure functions; these structs are the thin layer a
//! front end keeps between keystrokes and computation. Fields hold the raw
//! text exactly as typed. `parse` turns them into validated inputs,
//! `compute` runs the calculator, `reset` restores the defaults.

use crate::error::{InputError, Result};
use crate::gst::{GstInput, GstMode, GstResult, compute_gst};
use crate::sip::{SipInput, SipResult, compute_sip};

/// Raw text fields for the SIP calculator form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SipForm {
    pub monthly_investment: String,
    pub duration_years: String,
    pub annual_rate_percent: String,
}

impl SipForm {
    /// Parse the raw fields into a validated [`SipInput`].
    pub fn parse(&self) -> Result<SipInput> {
        Ok(SipInput {
            monthly_investment: parse_amount("monthly_investment", &self.monthly_investment)?,
            duration_years: parse_number("duration_years", &self.duration_years)?,
            annual_rate_percent: parse_percent("annual_rate_percent", &self.annual_rate_percent)?,
        })
    }

    /// Parse the fields and run the projection in one step.
    pub fn compute(&self) -> Result<SipResult> {
        compute_sip(&self.parse()?)
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Raw text fields for the GST calculator form. A fresh form starts at the
/// 18% slab in [`GstMode::Add`].
#[derive(Debug, Clone, PartialEq)]
pub struct GstForm {
    pub amount: String,
    pub rate_percent: String,
    pub mode: GstMode,
}

impl Default for GstForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            rate_percent: "18".to_string(),
            mode: GstMode::Add,
        }
    }
}

impl GstForm {
    /// Parse the raw fields into a validated [`GstInput`].
    pub fn parse(&self) -> Result<GstInput> {
        Ok(GstInput {
            amount: parse_amount("amount", &self.amount)?,
            rate_percent: parse_percent("rate_percent", &self.rate_percent)?,
            mode: self.mode,
        })
    }

    /// Parse the fields and run the calculation in one step.
    pub fn compute(&self) -> Result<GstResult> {
        compute_gst(&self.parse()?)
    }

    /// Restore the defaults (empty amount, 18% slab, add mode).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parse a currency field. Accepts a `₹` prefix and comma separators.
fn parse_amount(field: &'static str, raw: &str) -> Result<f64> {
    let cleaned = raw.trim().trim_start_matches('₹').replace(',', "");
    parse_cleaned(field, raw, &cleaned)
}

/// Parse a percentage field. Accepts a trailing `%`.
fn parse_percent(field: &'static str, raw: &str) -> Result<f64> {
    let cleaned = raw.trim().trim_end_matches('%').trim_end();
    parse_cleaned(field, raw, cleaned)
}

/// Parse a bare numeric field.
fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    parse_cleaned(field, raw, raw.trim())
}

fn parse_cleaned(field: &'static str, raw: &str, cleaned: &str) -> Result<f64> {
    cleaned.parse::<f64>().map_err(|_| InputError::NotANumber {
        field,
        raw: raw.trim().to_string(),
    })
}
