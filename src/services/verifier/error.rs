//! Verification error types.
//!
//! Invalid input and unknown hashes are expected outcomes of user queries and are
//! not logged as faults.

use log::{debug, error, info};
use std::{error::Error, fmt};

use crate::models::Outcome;

/// Errors that can occur while verifying the origin of a transaction
#[derive(Debug)]
pub enum VerificationError {
	/// Hash or expected address missing or malformed
	InvalidInput(String),

	/// The chain does not know the hash (possibly not yet propagated)
	NotFound(String),

	/// The chain node was unreachable or answered with malformed data
	GatewayError(String),
}

impl VerificationError {
	fn format_message(&self) -> String {
		match self {
			Self::InvalidInput(msg) => format!("Invalid input: {}", msg),
			Self::NotFound(msg) => format!("Transaction not found: {}", msg),
			Self::GatewayError(msg) => format!("Gateway error: {}", msg),
		}
	}

	pub fn invalid_input(msg: impl Into<String>) -> Self {
		let error = Self::InvalidInput(msg.into());
		debug!("{}", error.format_message());
		error
	}

	pub fn not_found(msg: impl Into<String>) -> Self {
		let error = Self::NotFound(msg.into());
		info!("{}", error.format_message());
		error
	}

	pub fn gateway_error(msg: impl Into<String>) -> Self {
		let error = Self::GatewayError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// How the failure is reported to the caller
	pub fn outcome(&self) -> Outcome {
		match self {
			Self::InvalidInput(_) => Outcome::BadRequest,
			Self::NotFound(_) => Outcome::NotFound,
			Self::GatewayError(_) => Outcome::ServerError,
		}
	}
}

impl fmt::Display for VerificationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for VerificationError {}
