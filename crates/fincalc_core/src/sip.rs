//! Systematic Investment Plan (SIP) maturity projection
//!
//! A SIP invests a fixed amount at the start of every month. The maturity
//! value follows the annuity-due future-value formula, compounded once per
//! contribution period:
//!
//! `M = P * (((1 + r)^n - 1) / r) * (1 + r)`
//!
//! where `P` is the monthly investment, `r` the monthly fractional rate and
//! `n` the number of periods. `n` stays a real number, so fractional years
//! produce fractional periods rather than being truncated to whole months.

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use crate::error::Result;
use crate::validate::require_positive;

/// Inputs for a SIP projection. All three values must be finite and
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct SipInput {
    /// Fixed amount invested at the start of every month
    pub monthly_investment: f64,
    /// Investment horizon in years; fractional values are allowed
    pub duration_years: f64,
    /// Expected annual return rate in percent (e.g. 12 for 12%)
    pub annual_rate_percent: f64,
}

/// Outcome of a SIP projection. Values are unrounded; rounding to currency
/// precision is a display concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct SipResult {
    /// Sum of all contributions over the horizon
    pub total_invested: f64,
    /// Growth on top of the contributions
    pub estimated_returns: f64,
    /// Final value: `total_invested + estimated_returns`
    pub maturity_amount: f64,
}

impl SipResult {
    /// Share of the maturity amount contributed by growth, in percent.
    #[must_use]
    pub fn returns_share_percent(&self) -> f64 {
        if self.maturity_amount == 0.0 {
            0.0
        } else {
            self.estimated_returns / self.maturity_amount * 100.0
        }
    }
}

/// Project the maturity value of a monthly SIP.
///
/// Rejects any non-finite, zero or negative input. The rate check is not
/// only a validation nicety: the annuity formula divides by the monthly
/// rate, so a zero rate must never reach it.
pub fn compute_sip(input: &SipInput) -> Result<SipResult> {
    let monthly = require_positive("monthly_investment", input.monthly_investment)?;
    let years = require_positive("duration_years", input.duration_years)?;
    let annual_rate = require_positive("annual_rate_percent", input.annual_rate_percent)?;

    let r = annual_rate / 12.0 / 100.0;
    let n = years * 12.0;

    let maturity_amount = monthly * (((1.0 + r).powf(n) - 1.0) / r) * (1.0 + r);
    let total_invested = monthly * n;

    Ok(SipResult {
        total_invested,
        estimated_returns: maturity_amount - total_invested,
        maturity_amount,
    })
}
