//! Blockchain error types and handling.
//!
//! Errors raised while talking to a chain node through the gateway, split between
//! connectivity problems and requests the node answered but could not satisfy.

use log::error;

use crate::services::blockchain::transports::TransportError;

/// Represents possible errors that can occur during blockchain operations
#[derive(Debug)]
pub enum BlockChainError {
	/// Errors related to network connectivity issues
	ConnectionError(String),

	/// Errors related to malformed requests or invalid responses
	RequestError(String),
}

impl BlockChainError {
	fn format_message(&self) -> String {
		match self {
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError(msg) => format!("Request error: {}", msg),
		}
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for BlockChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for BlockChainError {}

impl From<TransportError> for BlockChainError {
	fn from(err: TransportError) -> Self {
		if err.is_connectivity() {
			Self::connection_error(err.to_string())
		} else {
			Self::request_error(err.to_string())
		}
	}
}
