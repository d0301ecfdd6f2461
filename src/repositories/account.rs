//! Account directory repository.
//!
//! Maps usernames to the wallet addresses they own. Used to expand a history query
//! for a username into the addresses recorded in the lifecycle store.

use std::{collections::HashMap, path::Path};

use crate::{
	models::{Account, ConfigLoader},
	repositories::error::RepositoryError,
};

/// Accounts loaded from `config/accounts`, keyed by username
pub struct AccountRepository {
	pub accounts: HashMap<String, Account>,
}

impl AccountRepository {
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let accounts = Account::load_all(path)
			.map_err(|e| RepositoryError::load_error(format!("Failed to load accounts: {}", e)))?;
		Ok(AccountRepository { accounts })
	}
}

pub trait AccountRepositoryTrait {
	fn get(&self, username: &str) -> Option<Account>;
}

impl AccountRepositoryTrait for AccountRepository {
	fn get(&self, username: &str) -> Option<Account> {
		self.accounts.get(username).cloned()
	}
}

pub struct AccountService<T: AccountRepositoryTrait> {
	repository: T,
}

impl<T: AccountRepositoryTrait> AccountService<T> {
	pub fn new(path: Option<&Path>) -> Result<AccountService<AccountRepository>, RepositoryError> {
		let repository = AccountRepository::new(path)?;
		Ok(AccountService { repository })
	}

	pub fn new_with_repository(repository: T) -> Result<Self, RepositoryError> {
		Ok(AccountService { repository })
	}

	/// Wallet addresses owned by `username`
	///
	/// An unknown username owns no addresses.
	pub fn addresses_for(&self, username: &str) -> Vec<String> {
		self.repository
			.get(username)
			.map(|account| account.addresses)
			.unwrap_or_default()
	}
}
