//! Goods and Services Tax (GST) add/remove computation
//!
//! Two directions over the same identity `gross = net + tax`:
//! - [`GstMode::Add`]: the given amount is tax-exclusive and the tax goes on
//!   top of it
//! - [`GstMode::Remove`]: the given amount is tax-inclusive and the base is
//!   backed out as `amount * 100 / (100 + rate)`
//!
//! Results are unrounded; rounding to paise happens at display time.

use serde::{Deserialize, Serialize};

#[cfg(feature = "ts")]
use ts_rs::TS;

use crate::error::Result;
use crate::validate::{require_positive, require_rate};

/// Direction of a GST calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub enum GstMode {
    /// The amount is tax-exclusive; add tax on top
    #[default]
    Add,
    /// The amount is tax-inclusive; back the tax out
    Remove,
}

/// Inputs for a GST calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct GstInput {
    /// Amount in rupees: tax-exclusive for [`GstMode::Add`], tax-inclusive
    /// for [`GstMode::Remove`]. Must be finite and greater than zero.
    pub amount: f64,
    /// Tax rate in percent; zero is valid (exempt goods)
    pub rate_percent: f64,
    pub mode: GstMode,
}

/// Breakdown of an amount into its tax-exclusive and tax-inclusive parts.
///
/// `gross_amount == net_amount + tax_amount` holds in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(TS), ts(export))]
pub struct GstResult {
    /// Tax portion
    pub tax_amount: f64,
    /// Amount excluding tax
    pub net_amount: f64,
    /// Amount including tax
    pub gross_amount: f64,
}

/// One entry of the standard GST slab table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSlab {
    pub rate_percent: f64,
    pub label: &'static str,
}

/// The standard GST rate slabs, lowest to highest. Callers typically use
/// these to populate a rate selector; any non-negative rate is accepted by
/// [`compute_gst`] regardless.
pub const STANDARD_RATE_SLABS: [RateSlab; 5] = [
    RateSlab {
        rate_percent: 0.0,
        label: "Exempt",
    },
    RateSlab {
        rate_percent: 5.0,
        label: "Essential goods",
    },
    RateSlab {
        rate_percent: 12.0,
        label: "Standard goods",
    },
    RateSlab {
        rate_percent: 18.0,
        label: "Most goods",
    },
    RateSlab {
        rate_percent: 28.0,
        label: "Luxury goods",
    },
];

/// Split an amount into net, tax and gross according to the mode.
///
/// Rejects a non-finite or non-positive amount and a non-finite or negative
/// rate. The rate floor keeps the remove-mode divisor `100 + rate` at 100 or
/// above, so it can never reach zero.
pub fn compute_gst(input: &GstInput) -> Result<GstResult> {
    let amount = require_positive("amount", input.amount)?;
    let rate = require_rate("rate_percent", input.rate_percent)?;

    let result = match input.mode {
        GstMode::Add => {
            let tax_amount = amount * rate / 100.0;
            GstResult {
                tax_amount,
                net_amount: amount,
                gross_amount: amount + tax_amount,
            }
        }
        GstMode::Remove => {
            let net_amount = amount * 100.0 / (100.0 + rate);
            GstResult {
                tax_amount: amount - net_amount,
                net_amount,
                gross_amount: amount,
            }
        }
    };

    Ok(result)
}
