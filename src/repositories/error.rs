//! Error types for repository operations.
//!
//! Covers loading configuration directories and looking up entries in them.

use log::error;
use std::error::Error;
use std::fmt;

/// Errors that can occur during repository operations
#[derive(Debug)]
pub enum RepositoryError {
	/// Error that occurs when loading configurations from files
	LoadError(String),

	/// A requested entry is not configured
	NotFound(String),
}

impl RepositoryError {
	fn format_message(&self) -> String {
		match self {
			Self::LoadError(msg) => format!("Load error: {}", msg),
			Self::NotFound(msg) => format!("Not found: {}", msg),
		}
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new not found error with the given message
	pub fn not_found(msg: impl Into<String>) -> Self {
		let error = Self::NotFound(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}
