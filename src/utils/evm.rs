//! Helpers for EVM addresses and transaction hashes given as strings.

use alloy::primitives::{Address, B256};
use std::str::FromStr;

/// Normalizes an address string by lowercasing it and trimming whitespace
pub fn normalize_address(address: &str) -> String {
	address.trim().to_lowercase()
}

/// Compares two address strings ignoring letter case
pub fn are_same_address(address1: &str, address2: &str) -> bool {
	normalize_address(address1) == normalize_address(address2)
}

/// Parses an address string, accepting any letter case
pub fn parse_address(address: &str) -> Result<Address, String> {
	Address::from_str(address.trim()).map_err(|_| format!("Invalid address: {}", address.trim()))
}

/// Parses a transaction hash string into its 32-byte form
pub fn parse_hash(hash: &str) -> Result<B256, String> {
	let trimmed = hash.trim();
	let digits = trimmed
		.strip_prefix("0x")
		.or_else(|| trimmed.strip_prefix("0X"))
		.ok_or_else(|| format!("Transaction hash must be 0x-prefixed: {}", trimmed))?;
	if digits.len() != 64 {
		return Err(format!("Invalid transaction hash: {}", trimmed));
	}
	B256::from_str(digits).map_err(|_| format!("Invalid transaction hash: {}", trimmed))
}

/// Canonical key form of a transaction hash: lowercase, `0x` followed by 64 hex digits
pub fn normalize_hash(hash: &str) -> Result<String, String> {
	parse_hash(hash).map(|parsed| format!("{:#x}", parsed))
}
