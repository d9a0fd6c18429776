//! Display formatting for calculator results
//!
//! Indian-rupee currency strings use Indian digit grouping: the last three
//! digits form one group and every group above that has two (`₹11,61,695`).
//! SIP figures render with no paise and GST figures with exactly two; the
//! two calculators keep their distinct display contracts.

/// Format a rupee value with Indian grouping and no paise (SIP display).
#[must_use]
pub fn format_inr(value: f64) -> String {
    let rupees = value.abs().round() as i64;
    let grouped = group_indian_digits(&rupees.to_string());
    if value < 0.0 && rupees > 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Format a rupee value with Indian grouping and exactly two paise digits
/// (GST display).
#[must_use]
pub fn format_inr_paise(value: f64) -> String {
    let total_paise = (value.abs() * 100.0).round() as i64;
    let rupees = total_paise / 100;
    let paise = total_paise % 100;
    let grouped = group_indian_digits(&rupees.to_string());
    if value < 0.0 && total_paise > 0 {
        format!("-₹{grouped}.{paise:02}")
    } else {
        format!("₹{grouped}.{paise:02}")
    }
}

/// Format a percentage with one decimal place.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Insert Indian-style separators: groups of two above the lowest three
/// digits.
fn group_indian_digits(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i >= 3 && (i - 3) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1_234.0), "₹1,234");
        assert_eq!(format_inr(600_000.0), "₹6,00,000");
        assert_eq!(format_inr(1_161_695.0), "₹11,61,695");
        assert_eq!(format_inr(123_456_789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_inr_rounds_to_whole_rupees() {
        assert_eq!(format_inr(1_161_695.38), "₹11,61,695");
        assert_eq!(format_inr(999.6), "₹1,000");
    }

    #[test]
    fn test_inr_paise() {
        assert_eq!(format_inr_paise(11_800.0), "₹11,800.00");
        assert_eq!(format_inr_paise(123_456.78), "₹1,23,456.78");
        assert_eq!(format_inr_paise(2.5), "₹2.50");
        assert_eq!(format_inr_paise(0.0), "₹0.00");
    }

    #[test]
    fn test_negative_sign_placement() {
        assert_eq!(format_inr(-50_000.0), "-₹50,000");
        assert_eq!(format_inr_paise(-1_800.5), "-₹1,800.50");
        // A fraction that rounds away to zero keeps no sign
        assert_eq!(format_inr(-0.4), "₹0");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(48.3513), "48.4%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
