//! Network configuration repository.

use std::{collections::HashMap, path::Path};

use crate::{
	models::{ConfigLoader, Network},
	repositories::error::RepositoryError,
};

/// Networks loaded from `config/networks`, keyed by slug
pub struct NetworkRepository {
	pub networks: HashMap<String, Network>,
}

impl NetworkRepository {
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let networks = Network::load_all(path)
			.map_err(|e| RepositoryError::load_error(format!("Failed to load networks: {}", e)))?;
		Ok(NetworkRepository { networks })
	}
}

pub trait NetworkRepositoryTrait {
	fn get(&self, network_slug: &str) -> Option<Network>;
}

impl NetworkRepositoryTrait for NetworkRepository {
	fn get(&self, network_slug: &str) -> Option<Network> {
		self.networks.get(network_slug).cloned()
	}
}

pub struct NetworkService<T: NetworkRepositoryTrait> {
	repository: T,
}

impl<T: NetworkRepositoryTrait> NetworkService<T> {
	pub fn new(path: Option<&Path>) -> Result<NetworkService<NetworkRepository>, RepositoryError> {
		let repository = NetworkRepository::new(path)?;
		Ok(NetworkService { repository })
	}

	pub fn new_with_repository(repository: T) -> Result<Self, RepositoryError> {
		Ok(NetworkService { repository })
	}

	pub fn get(&self, network_slug: &str) -> Option<Network> {
		self.repository.get(network_slug)
	}

	/// Looks up a network that must be configured
	pub fn require(&self, network_slug: &str) -> Result<Network, RepositoryError> {
		self.repository.get(network_slug).ok_or_else(|| {
			RepositoryError::not_found(format!("Network '{}' is not configured", network_slug))
		})
	}
}
