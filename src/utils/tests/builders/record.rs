//! Test helper utilities for lifecycle records
//!
//! - `NewTransactionBuilder`: Builder for creating submissions to the lifecycle store

use crate::models::NewTransaction;

/// Builder for creating test NewTransaction instances
pub struct NewTransactionBuilder {
	hash: String,
	sender: String,
	recipient: String,
	amount: String,
	token_symbol: String,
}

impl Default for NewTransactionBuilder {
	fn default() -> Self {
		Self {
			hash: "0xabc0000000000000000000000000000000000000000000000000000000000000"
				.to_string(),
			sender: "0x1111111111111111111111111111111111111111".to_string(),
			recipient: "0x2222222222222222222222222222222222222222".to_string(),
			amount: "1.0".to_string(),
			token_symbol: "BNB".to_string(),
		}
	}
}

impl NewTransactionBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn hash(mut self, hash: &str) -> Self {
		self.hash = hash.to_string();
		self
	}

	pub fn sender(mut self, sender: &str) -> Self {
		self.sender = sender.to_string();
		self
	}

	pub fn recipient(mut self, recipient: &str) -> Self {
		self.recipient = recipient.to_string();
		self
	}

	pub fn amount(mut self, amount: &str) -> Self {
		self.amount = amount.to_string();
		self
	}

	pub fn token_symbol(mut self, token_symbol: &str) -> Self {
		self.token_symbol = token_symbol.to_string();
		self
	}

	pub fn build(self) -> NewTransaction {
		NewTransaction {
			hash: self.hash,
			sender: self.sender,
			recipient: self.recipient,
			amount: self.amount,
			token_symbol: self.token_symbol,
		}
	}
}
