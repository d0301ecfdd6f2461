//! EVM transaction data structures.

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// A transaction as reported by an EVM node
///
/// Only the fields needed to classify a transfer are kept. Everything else in the
/// `eth_getTransactionByHash` payload (gas, nonce, signature) is ignored during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
	/// Transaction hash
	pub hash: B256,

	/// Address that originated the transaction
	pub from: Address,

	/// Destination address (None for contract creation)
	#[serde(default)]
	pub to: Option<Address>,

	/// Native value carried by the transaction, in the smallest unit
	#[serde(default)]
	pub value: U256,

	/// Call-data sent with the transaction
	#[serde(default, alias = "data")]
	pub input: Bytes,
}

impl Transaction {
	/// Get the transaction hash
	pub fn hash(&self) -> &B256 {
		&self.hash
	}

	/// Get the transaction sender address
	pub fn sender(&self) -> &Address {
		&self.from
	}

	/// Get the transaction recipient address (None for contract creation)
	pub fn to(&self) -> Option<&Address> {
		self.to.as_ref()
	}

	/// Get the native value transferred
	pub fn value(&self) -> &U256 {
		&self.value
	}

	/// Get the raw call-data
	pub fn input(&self) -> &[u8] {
		self.input.as_ref()
	}

	/// Returns the leading 4 bytes of the call-data, if present
	pub fn selector(&self) -> Option<[u8; 4]> {
		self.input.get(..4).and_then(|s| s.try_into().ok())
	}
}
