//! Configuration error types.

use log::error;
use std::{error::Error, fmt};

/// Errors that can occur while loading configuration files
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// A configuration directory does not exist
	DirectoryNotFound(String),

	/// A file parsed but its content is not acceptable
	ValidationError(String),

	/// A file is not valid JSON for the expected shape
	ParseError(String),

	/// The file system refused a read
	FileError(String),
}

impl ConfigError {
	fn format_message(&self) -> String {
		match self {
			Self::DirectoryNotFound(dir) => format!("Config directory not found: {}", dir),
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::ParseError(msg) => format!("Parse error: {}", msg),
			Self::FileError(msg) => format!("File error: {}", msg),
		}
	}

	pub fn directory_not_found(dir: impl Into<String>) -> Self {
		let error = Self::DirectoryNotFound(dir.into());
		error!("{}", error.format_message());
		error
	}

	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error.format_message());
		error
	}

	pub fn file_error(msg: impl Into<String>) -> Self {
		let error = Self::FileError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(err.to_string())
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error(err.to_string())
	}
}
