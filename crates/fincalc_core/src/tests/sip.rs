//! Tests for the SIP maturity projection
//!
//! These tests verify that:
//! - The canonical 5k/10y/12% projection lands on the published figure
//! - The maturity identity holds across a spread of inputs
//! - Fractional durations produce fractional contribution periods
//! - Invalid inputs are rejected with the offending field named

use crate::error::InputError;
use crate::sip::{SipInput, compute_sip};

#[test]
fn test_standard_projection() {
    // 5,000/month for 10 years at 12%: r = 0.01, n = 120
    let result = compute_sip(&SipInput {
        monthly_investment: 5_000.0,
        duration_years: 10.0,
        annual_rate_percent: 12.0,
    })
    .unwrap();

    assert_eq!(result.total_invested, 600_000.0);
    assert!(
        (result.maturity_amount - 1_161_695.38).abs() < 1.0,
        "Expected ~1,161,695, got {:.2}",
        result.maturity_amount
    );
    assert!(
        (result.estimated_returns - 561_695.38).abs() < 1.0,
        "Expected ~561,695, got {:.2}",
        result.estimated_returns
    );
}

#[test]
fn test_maturity_identity() {
    // maturity == invested + returns within 1e-6 relative tolerance
    for monthly in [500.0, 5_000.0, 125_000.0] {
        for years in [1.0, 7.5, 30.0] {
            for rate in [0.5, 8.0, 15.0] {
                let result = compute_sip(&SipInput {
                    monthly_investment: monthly,
                    duration_years: years,
                    annual_rate_percent: rate,
                })
                .unwrap();

                let rebuilt = result.total_invested + result.estimated_returns;
                let rel = ((result.maturity_amount - rebuilt) / result.maturity_amount).abs();
                assert!(
                    rel < 1e-6,
                    "Identity violated for ({monthly}, {years}, {rate}): rel error {rel}"
                );
            }
        }
    }
}

#[test]
fn test_fractional_duration() {
    // Half a year is six periods, not a truncated zero
    let result = compute_sip(&SipInput {
        monthly_investment: 5_000.0,
        duration_years: 0.5,
        annual_rate_percent: 12.0,
    })
    .unwrap();

    assert_eq!(result.total_invested, 30_000.0);
    // 5,000 * ((1.01^6 - 1) / 0.01) * 1.01
    assert!(
        (result.maturity_amount - 31_067.68).abs() < 0.01,
        "Expected ~31,067.68, got {:.2}",
        result.maturity_amount
    );
}

#[test]
fn test_rejects_zero_investment() {
    let result = compute_sip(&SipInput {
        monthly_investment: 0.0,
        duration_years: 10.0,
        annual_rate_percent: 12.0,
    });
    assert!(matches!(
        result,
        Err(InputError::NotPositive {
            field: "monthly_investment",
            ..
        })
    ));
}

#[test]
fn test_rejects_negative_duration() {
    let result = compute_sip(&SipInput {
        monthly_investment: 5_000.0,
        duration_years: -1.0,
        annual_rate_percent: 12.0,
    });
    assert!(matches!(
        result,
        Err(InputError::NotPositive {
            field: "duration_years",
            ..
        })
    ));
}

#[test]
fn test_rejects_non_finite_inputs() {
    let result = compute_sip(&SipInput {
        monthly_investment: f64::NAN,
        duration_years: 10.0,
        annual_rate_percent: 12.0,
    });
    assert!(matches!(result, Err(InputError::NotFinite { .. })));

    let result = compute_sip(&SipInput {
        monthly_investment: 5_000.0,
        duration_years: f64::INFINITY,
        annual_rate_percent: 12.0,
    });
    assert!(matches!(result, Err(InputError::NotFinite { .. })));
}
