use serde::{Deserialize, Serialize};

/// Wallet addresses owned by a user
///
/// Credentials live elsewhere; this is only the owner mapping consulted when
/// listing history for a username.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Account {
	pub username: String,
	pub addresses: Vec<String>,
}
