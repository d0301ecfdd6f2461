use alloy::primitives::U256;
use proptest::{prelude::*, test_runner::Config};

use transfer_tracker::utils::format_units;

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_whole_part_is_integer_division(value in any::<u64>(), decimals in 0u8..30) {
		let formatted = format_units(U256::from(value), decimals);
		let (whole, fraction) = formatted.split_once('.').unwrap();

		let scale = U256::from(10u64).pow(U256::from(decimals));
		prop_assert_eq!(whole, (U256::from(value) / scale).to_string());
		prop_assert!(!fraction.is_empty());
		prop_assert!(fraction == "0" || !fraction.ends_with('0'));
		prop_assert!(fraction.len() <= (decimals as usize).max(1));
	}

	#[test]
	fn test_digits_are_preserved(value in 1u64.., decimals in 0u8..30) {
		let formatted = format_units(U256::from(value), decimals);
		let (whole, fraction) = formatted.split_once('.').unwrap();

		let mut fraction = fraction.to_string();
		if decimals == 0 {
			fraction.clear();
		}
		while fraction.len() < decimals as usize {
			fraction.push('0');
		}
		let digits = format!("{}{}", whole, fraction);
		prop_assert_eq!(digits.trim_start_matches('0'), value.to_string());
	}
}
