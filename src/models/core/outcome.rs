//! Caller-facing classification of failures.

use serde::Serialize;
use std::fmt;

/// How a failed operation should be reported to the caller
///
/// Each variant maps to a distinct HTTP-style status code and a distinct process
/// exit code, so that e.g. a duplicate submission is never confused with a
/// server fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
	/// Missing or malformed request fields
	BadRequest,
	/// Hash unknown to the chain or to the store
	NotFound,
	/// Hash already recorded
	Conflict,
	/// Transition attempted on a terminal record, nothing changed
	NotApplicable,
	/// Gateway, storage, or unanticipated fault
	ServerError,
}

impl Outcome {
	pub fn status_code(&self) -> u16 {
		match self {
			Outcome::BadRequest => 400,
			Outcome::NotFound => 404,
			Outcome::Conflict => 409,
			Outcome::NotApplicable => 422,
			Outcome::ServerError => 500,
		}
	}

	/// Process exit code used by the CLI
	pub fn exit_code(&self) -> i32 {
		match self {
			Outcome::BadRequest => 2,
			Outcome::NotFound => 3,
			Outcome::Conflict => 4,
			Outcome::NotApplicable => 5,
			Outcome::ServerError => 1,
		}
	}
}

impl fmt::Display for Outcome {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Outcome::BadRequest => "bad request",
			Outcome::NotFound => "not found",
			Outcome::Conflict => "conflict",
			Outcome::NotApplicable => "not applicable",
			Outcome::ServerError => "server error",
		};
		write!(f, "{}", label)
	}
}
