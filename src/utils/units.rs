//! Conversion of integer amounts to human readable decimal strings.

use alloy::primitives::U256;

/// Formats a raw integer amount scaled by `decimals`
///
/// Trailing zeros of the fractional part are dropped but at least one fractional
/// digit is always kept, so `10^18` with 18 decimals formats as `"1.0"`. Works for
/// any number of decimals, including values larger than `U256` can express as a
/// power of ten.
pub fn format_units(value: U256, decimals: u8) -> String {
	let digits = value.to_string();
	let decimals = decimals as usize;

	let padded = if digits.len() <= decimals {
		format!("{}{}", "0".repeat(decimals - digits.len() + 1), digits)
	} else {
		digits
	};

	let (whole, fraction) = padded.split_at(padded.len() - decimals);
	let fraction = fraction.trim_end_matches('0');

	if fraction.is_empty() {
		format!("{}.0", whole)
	} else {
		format!("{}.{}", whole, fraction)
	}
}
