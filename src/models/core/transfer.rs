//! Normalized transfer produced by classifying a transaction.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of value movement a transaction represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferKind {
	/// Value carried in the transaction's native value field
	NativeCoin,
	/// ERC-20 `transfer(address,uint256)` call on a token contract
	FungibleToken,
	/// Any other contract call, including undecodable transfer-like calls
	OpaqueInteraction,
}

impl TransferKind {
	/// Stable label used for metrics and logs
	pub fn as_str(&self) -> &'static str {
		match self {
			TransferKind::NativeCoin => "native_coin",
			TransferKind::FungibleToken => "fungible_token",
			TransferKind::OpaqueInteraction => "opaque_interaction",
		}
	}
}

impl fmt::Display for TransferKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Semantic view of a transaction
///
/// For token transfers `recipient` is the decoded transfer target rather than the
/// token contract the transaction was sent to. `amount` is already scaled to a
/// human readable decimal string, or `"N/A"` for opaque interactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedTransfer {
	pub kind: TransferKind,
	#[serde(rename = "from")]
	pub sender: Address,
	#[serde(rename = "to")]
	pub recipient: Option<Address>,
	pub amount: String,
	pub token_symbol: String,
}
