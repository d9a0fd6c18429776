//! Stateless financial calculators for Indian personal finance
//!
//! This crate provides the computation core for two independent calculators:
//! - SIP (Systematic Investment Plan): maturity projection for a fixed
//!   monthly investment using the annuity-due compound-growth formula
//! - GST (Goods and Services Tax): add tax on top of a base amount, or back
//!   it out of a tax-inclusive amount
//!
//! Both calculators are pure functions over plain value structs. Validation
//! failures come back as a structured [`InputError`] for the caller to
//! present however it likes; there are no dialogs, no panics, and no shared
//! state between invocations.
//!
//! ```
//! use fincalc_core::{SipInput, compute_sip};
//!
//! let result = compute_sip(&SipInput {
//!     monthly_investment: 5_000.0,
//!     duration_years: 10.0,
//!     annual_rate_percent: 12.0,
//! })
//! .unwrap();
//!
//! assert_eq!(result.total_invested, 600_000.0);
//! assert!(result.estimated_returns > 0.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod format;
pub mod gst;
pub mod sip;
pub mod validate;

// ============================================================================
// Caller-side helpers
// ============================================================================

pub mod form;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{InputError, Result};
pub use form::{GstForm, SipForm};
pub use format::{format_inr, format_inr_paise, format_percent};
pub use gst::{GstInput, GstMode, GstResult, RateSlab, STANDARD_RATE_SLABS, compute_gst};
pub use sip::{SipInput, SipResult, compute_sip};
