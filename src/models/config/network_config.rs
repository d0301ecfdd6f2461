use std::path::Path;

use crate::models::{ConfigError, ConfigLoader, Network};

impl ConfigLoader for Network {
	const DEFAULT_DIR: &'static str = "config/networks";

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let config: Network = serde_json::from_reader(file)?;

		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(format!(
				"{}: {}",
				path.display(),
				validation_error
			)));
		}

		Ok(config)
	}

	fn key(&self) -> String {
		self.slug.clone()
	}

	fn validate(&self) -> Result<(), String> {
		if self.slug.is_empty()
			|| !self
				.slug
				.chars()
				.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
		{
			return Err(
				"Slug must contain only lowercase letters, numbers, and underscores".to_string(),
			);
		}

		if self.native_symbol.trim().is_empty() {
			return Err("Native symbol must not be empty".to_string());
		}

		let supported_types = ["rpc"];
		if !self
			.rpc_urls
			.iter()
			.all(|rpc_url| supported_types.contains(&rpc_url.type_.as_str()))
		{
			return Err(format!(
				"RPC URL type must be one of: {}",
				supported_types.join(", ")
			));
		}

		if !self.rpc_urls.iter().all(|rpc_url| {
			rpc_url.url.starts_with("http://") || rpc_url.url.starts_with("https://")
		}) {
			return Err("All RPC URLs must start with http:// or https://".to_string());
		}

		if !self.rpc_urls.iter().all(|rpc_url| rpc_url.weight <= 100) {
			return Err("All RPC URL weights must be between 0 and 100".to_string());
		}

		if !self.rpc_urls.iter().any(|rpc_url| rpc_url.weight > 0) {
			return Err("At least one RPC URL must have a positive weight".to_string());
		}

		if self.confirmation_poll_interval_ms < 100 {
			return Err("Confirmation poll interval must be at least 100ms".to_string());
		}

		Ok(())
	}
}
