//! Configuration loading and validation.
//!
//! Networks live in `config/networks/*.json` and accounts in `config/accounts/*.json`.
//! Every file is validated right after parsing.

use std::path::Path;

mod account_config;
mod error;
mod network_config;

pub use error::ConfigError;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Directory used when no path is given
	const DEFAULT_DIR: &'static str;

	/// Loads every JSON file of a directory, keyed by [`ConfigLoader::key`]
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		let dir = path.unwrap_or(Path::new(Self::DEFAULT_DIR));
		if !dir.exists() {
			return Err(ConfigError::directory_not_found(dir.display().to_string()));
		}

		let mut pairs = Vec::new();
		for entry in std::fs::read_dir(dir)? {
			let path = entry?.path();
			if !Self::is_json_file(&path) {
				continue;
			}
			let config = Self::load_from_path(&path)?;
			pairs.push((config.key(), config));
		}

		Ok(T::from_iter(pairs))
	}

	/// Loads and validates a single file
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	/// Identifier the config is stored under
	fn key(&self) -> String;

	fn validate(&self) -> Result<(), String>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
