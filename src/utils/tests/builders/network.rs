//! Test helper utilities for Network configuration
//!
//! - `NetworkBuilder`: Builder for creating test Network instances

use crate::models::{Network, RpcUrl};

/// Builder for creating test Network instances
pub struct NetworkBuilder {
	name: String,
	slug: String,
	chain_id: Option<u64>,
	rpc_urls: Vec<RpcUrl>,
	native_symbol: String,
	native_decimals: u8,
	confirmation_poll_interval_ms: u64,
}

impl Default for NetworkBuilder {
	fn default() -> Self {
		Self {
			name: "Test Network".to_string(),
			slug: "test_network".to_string(),
			chain_id: Some(97),
			rpc_urls: vec![RpcUrl {
				type_: "rpc".to_string(),
				url: "http://localhost:8545".to_string(),
				weight: 100,
			}],
			native_symbol: "BNB".to_string(),
			native_decimals: 18,
			confirmation_poll_interval_ms: 100,
		}
	}
}

impl NetworkBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name(mut self, name: &str) -> Self {
		self.name = name.to_string();
		self
	}

	pub fn slug(mut self, slug: &str) -> Self {
		self.slug = slug.to_string();
		self
	}

	pub fn chain_id(mut self, chain_id: u64) -> Self {
		self.chain_id = Some(chain_id);
		self
	}

	/// Replaces all RPC URLs with a single full-weight URL
	pub fn rpc_url(mut self, url: &str) -> Self {
		self.rpc_urls = vec![RpcUrl {
			type_: "rpc".to_string(),
			url: url.to_string(),
			weight: 100,
		}];
		self
	}

	pub fn add_rpc_url(mut self, url: &str, weight: u32) -> Self {
		self.rpc_urls.push(RpcUrl {
			type_: "rpc".to_string(),
			url: url.to_string(),
			weight,
		});
		self
	}

	pub fn rpc_urls(mut self, rpc_urls: Vec<RpcUrl>) -> Self {
		self.rpc_urls = rpc_urls;
		self
	}

	pub fn native_symbol(mut self, symbol: &str) -> Self {
		self.native_symbol = symbol.to_string();
		self
	}

	pub fn native_decimals(mut self, decimals: u8) -> Self {
		self.native_decimals = decimals;
		self
	}

	pub fn poll_interval_ms(mut self, interval: u64) -> Self {
		self.confirmation_poll_interval_ms = interval;
		self
	}

	pub fn build(self) -> Network {
		Network {
			slug: self.slug,
			name: self.name,
			chain_id: self.chain_id,
			rpc_urls: self.rpc_urls,
			native_symbol: self.native_symbol,
			native_decimals: self.native_decimals,
			confirmation_poll_interval_ms: self.confirmation_poll_interval_ms,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_network() {
		let network = NetworkBuilder::new().build();

		assert_eq!(network.slug, "test_network");
		assert_eq!(network.rpc_urls.len(), 1);
		assert_eq!(network.rpc_urls[0].url, "http://localhost:8545");
		assert_eq!(network.native_symbol, "BNB");
		assert_eq!(network.native_decimals, 18);
	}

	#[test]
	fn test_multiple_rpc_urls() {
		let network = NetworkBuilder::new()
			.rpc_url("http://primary:8545")
			.add_rpc_url("http://fallback:8545", 50)
			.build();

		assert_eq!(network.rpc_urls.len(), 2);
		assert_eq!(network.rpc_urls[1].weight, 50);
	}
}
