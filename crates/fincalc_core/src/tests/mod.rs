//! Integration tests for the fincalc calculators
//!
//! Tests are organized by topic:
//! - `sip` - SIP projection scenarios, invariants, rejections
//! - `gst` - GST add/remove scenarios, round trips, rejections
//! - `forms` - Form parsing, defaults, reset, wire format

mod sip;
