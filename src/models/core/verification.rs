use serde::{Deserialize, Serialize};

use super::ClassifiedTransfer;

/// Answer to "was this transaction sent by this address"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationVerdict {
	/// Sender matches the expected address, ignoring letter case
	pub is_valid: bool,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub details: Option<ClassifiedTransfer>,
}
