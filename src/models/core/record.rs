//! Persisted lifecycle records of submitted transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::ClassifiedTransfer;

/// Lifecycle status of a tracked transaction
///
/// `Pending` is the only non-terminal state. A record leaves it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
	Pending,
	Success,
	Failed,
}

impl TransactionStatus {
	/// Check if this is a terminal status
	pub fn is_terminal(&self) -> bool {
		matches!(self, TransactionStatus::Success | TransactionStatus::Failed)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			TransactionStatus::Pending => "pending",
			TransactionStatus::Success => "success",
			TransactionStatus::Failed => "failed",
		}
	}
}

impl fmt::Display for TransactionStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Target of a status transition
///
/// Separate from [`TransactionStatus`] so that a transition back to pending cannot be
/// expressed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalStatus {
	Success,
	Failed,
}

impl From<TerminalStatus> for TransactionStatus {
	fn from(status: TerminalStatus) -> Self {
		match status {
			TerminalStatus::Success => TransactionStatus::Success,
			TerminalStatus::Failed => TransactionStatus::Failed,
		}
	}
}

impl fmt::Display for TerminalStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", TransactionStatus::from(*self))
	}
}

impl FromStr for TerminalStatus {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"success" => Ok(TerminalStatus::Success),
			"failed" => Ok(TerminalStatus::Failed),
			other => Err(format!(
				"Invalid status '{}', expected one of: success, failed",
				other
			)),
		}
	}
}

/// Submission details used to create a pending record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
	#[serde(alias = "txHash")]
	pub hash: String,
	#[serde(alias = "from")]
	pub sender: String,
	#[serde(alias = "to")]
	pub recipient: String,
	pub amount: String,
	pub token_symbol: String,
}

impl NewTransaction {
	/// Returns the names of required fields that are empty
	pub fn missing_fields(&self) -> Vec<&'static str> {
		[
			("hash", &self.hash),
			("sender", &self.sender),
			("recipient", &self.recipient),
			("amount", &self.amount),
			("tokenSymbol", &self.token_symbol),
		]
		.into_iter()
		.filter(|(_, value)| value.trim().is_empty())
		.map(|(name, _)| name)
		.collect()
	}

	/// Submission describing a classified transaction
	///
	/// The recipient is left empty for contract creations, which makes the
	/// submission incomplete until a recipient is supplied.
	pub fn from_classified(hash: impl Into<String>, transfer: &ClassifiedTransfer) -> Self {
		Self {
			hash: hash.into(),
			sender: transfer.sender.to_string(),
			recipient: transfer
				.recipient
				.map(|recipient| recipient.to_string())
				.unwrap_or_default(),
			amount: transfer.amount.clone(),
			token_symbol: transfer.token_symbol.clone(),
		}
	}

	/// Builds the pending record for this submission
	pub fn into_pending(self, hash: String, created_at: DateTime<Utc>) -> TransactionRecord {
		TransactionRecord {
			hash,
			sender: self.sender,
			recipient: self.recipient,
			amount: self.amount,
			token_symbol: self.token_symbol,
			status: TransactionStatus::Pending,
			created_at,
		}
	}
}

/// Durable record of a submitted transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
	/// Unique key, lowercase `0x`-prefixed hex
	pub hash: String,
	pub sender: String,
	pub recipient: String,
	pub amount: String,
	pub token_symbol: String,
	pub status: TransactionStatus,
	pub created_at: DateTime<Utc>,
}
