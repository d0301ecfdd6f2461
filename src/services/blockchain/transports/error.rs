//! Transport layer error types.

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while moving a JSON-RPC payload to and from a node
#[derive(Debug, Error)]
pub enum TransportError {
	/// The node answered with a non-success HTTP status
	#[error("HTTP error: status {status_code} for URL {url}: {body}")]
	Http {
		status_code: reqwest::StatusCode,
		url: String,
		body: String,
	},

	/// The request never reached the node or the connection dropped
	#[error("Network error: {message}")]
	Network {
		message: String,
		#[source]
		source: Option<BoxedSource>,
	},

	/// The node answered with a body that is not JSON
	#[error("Failed to parse JSON response: {message}")]
	ResponseParse {
		message: String,
		#[source]
		source: Option<BoxedSource>,
	},

	/// The request body could not be serialized
	#[error("Failed to serialize request JSON: {message}")]
	RequestSerialization {
		message: String,
		#[source]
		source: Option<BoxedSource>,
	},

	/// Every fallback URL was tried and none accepted the connection
	#[error("URL rotation failed: {message}")]
	UrlRotation {
		message: String,
		#[source]
		source: Option<BoxedSource>,
	},
}

impl TransportError {
	pub fn http(
		status_code: reqwest::StatusCode,
		url: impl Into<String>,
		body: impl Into<String>,
	) -> Self {
		Self::Http {
			status_code,
			url: url.into(),
			body: body.into(),
		}
	}

	pub fn network(message: impl Into<String>, source: Option<BoxedSource>) -> Self {
		Self::Network {
			message: message.into(),
			source,
		}
	}

	pub fn response_parse(message: impl Into<String>, source: Option<BoxedSource>) -> Self {
		Self::ResponseParse {
			message: message.into(),
			source,
		}
	}

	pub fn request_serialization(message: impl Into<String>, source: Option<BoxedSource>) -> Self {
		Self::RequestSerialization {
			message: message.into(),
			source,
		}
	}

	pub fn url_rotation(message: impl Into<String>, source: Option<BoxedSource>) -> Self {
		Self::UrlRotation {
			message: message.into(),
			source,
		}
	}

	/// Whether the failure means the node could not be reached
	pub fn is_connectivity(&self) -> bool {
		matches!(
			self,
			Self::Http { .. } | Self::Network { .. } | Self::UrlRotation { .. }
		)
	}
}
