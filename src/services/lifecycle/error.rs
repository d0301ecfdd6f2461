//! Lifecycle error types.
//!
//! The first four variants are expected outcomes that callers distinguish from one
//! another. Storage and internal errors are faults and always log at error level.

use log::{debug, error, info, warn};
use std::{error::Error, fmt};

use crate::models::Outcome;

/// Errors that can occur while recording or resolving a tracked transaction
#[derive(Debug)]
pub enum LifecycleError {
	/// Submission fields missing or malformed
	InvalidInput(String),

	/// A record with this hash already exists
	DuplicateHash(String),

	/// No record exists for this hash
	NotFound(String),

	/// The record is already terminal; nothing was changed
	InvalidTransition(String),

	/// The chain could not be queried while deriving record fields
	GatewayError(String),

	/// The durable store could not be read or written
	StorageError(String),

	/// Unexpected failure, such as a panicked tracking task
	InternalError(String),
}

impl LifecycleError {
	fn format_message(&self) -> String {
		match self {
			Self::InvalidInput(msg) => format!("Invalid input: {}", msg),
			Self::DuplicateHash(msg) => format!("Duplicate transaction hash: {}", msg),
			Self::NotFound(msg) => format!("Transaction not found: {}", msg),
			Self::InvalidTransition(msg) => format!("Invalid transition: {}", msg),
			Self::GatewayError(msg) => format!("Gateway error: {}", msg),
			Self::StorageError(msg) => format!("Storage error: {}", msg),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	pub fn invalid_input(msg: impl Into<String>) -> Self {
		let error = Self::InvalidInput(msg.into());
		debug!("{}", error.format_message());
		error
	}

	pub fn duplicate_hash(hash: impl Into<String>) -> Self {
		let error = Self::DuplicateHash(hash.into());
		info!("{}", error.format_message());
		error
	}

	pub fn not_found(hash: impl Into<String>) -> Self {
		let error = Self::NotFound(hash.into());
		info!("{}", error.format_message());
		error
	}

	pub fn invalid_transition(msg: impl Into<String>) -> Self {
		let error = Self::InvalidTransition(msg.into());
		warn!("{}", error.format_message());
		error
	}

	pub fn gateway_error(msg: impl Into<String>) -> Self {
		let error = Self::GatewayError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn storage_error(msg: impl Into<String>) -> Self {
		let error = Self::StorageError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// How the failure is reported to the caller
	pub fn outcome(&self) -> Outcome {
		match self {
			Self::InvalidInput(_) => Outcome::BadRequest,
			Self::DuplicateHash(_) => Outcome::Conflict,
			Self::NotFound(_) => Outcome::NotFound,
			Self::InvalidTransition(_) => Outcome::NotApplicable,
			Self::GatewayError(_) | Self::StorageError(_) | Self::InternalError(_) => {
				Outcome::ServerError
			}
		}
	}
}

impl fmt::Display for LifecycleError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for LifecycleError {}

impl From<std::io::Error> for LifecycleError {
	fn from(err: std::io::Error) -> Self {
		Self::storage_error(err.to_string())
	}
}

impl From<serde_json::Error> for LifecycleError {
	fn from(err: serde_json::Error) -> Self {
		Self::storage_error(format!("Corrupt record: {}", err))
	}
}
