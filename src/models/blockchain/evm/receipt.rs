//! EVM transaction receipt data structures.

use alloy::primitives::{B256, U64};
use serde::{Deserialize, Serialize};

/// Receipt of a mined transaction
///
/// A receipt only exists once the transaction is included in a block, so its
/// presence alone signals that the transaction left the mempool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
	/// Hash of the transaction this receipt belongs to
	pub transaction_hash: B256,

	/// Number of the block that includes the transaction
	#[serde(default)]
	pub block_number: Option<U64>,

	/// Execution status, `1` for success and `0` for failure (post-Byzantium)
	#[serde(default)]
	pub status: Option<U64>,
}

impl TransactionReceipt {
	/// Whether execution succeeded
	///
	/// Pre-Byzantium receipts carry no status field; inclusion is treated as success.
	pub fn is_success(&self) -> bool {
		self.status.is_none_or(|status| status == U64::from(1))
	}
}
