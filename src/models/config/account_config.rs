use alloy::primitives::Address;
use std::{path::Path, str::FromStr};

use crate::models::{Account, ConfigError, ConfigLoader};

impl ConfigLoader for Account {
	const DEFAULT_DIR: &'static str = "config/accounts";

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let account: Account = serde_json::from_reader(file)?;

		if let Err(validation_error) = account.validate() {
			return Err(ConfigError::validation_error(format!(
				"{}: {}",
				path.display(),
				validation_error
			)));
		}

		Ok(account)
	}

	fn key(&self) -> String {
		self.username.clone()
	}

	fn validate(&self) -> Result<(), String> {
		if self.username.trim().is_empty() {
			return Err("Username must not be empty".to_string());
		}

		if let Some(invalid) = self
			.addresses
			.iter()
			.find(|address| Address::from_str(address).is_err())
		{
			return Err(format!("Invalid wallet address: {}", invalid));
		}

		Ok(())
	}
}
