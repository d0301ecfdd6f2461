use serde::{Deserialize, Serialize};

/// RPC endpoint of a network, tried in descending weight order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RpcUrl {
	pub type_: String,
	pub url: String,
	pub weight: u32,
}

/// EVM network the tracker talks to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Network {
	pub slug: String,
	pub name: String,
	pub chain_id: Option<u64>,
	pub rpc_urls: Vec<RpcUrl>,
	/// Symbol reported for native coin transfers
	pub native_symbol: String,
	/// Exponent of the native unit (18 on every EVM chain in practice)
	pub native_decimals: u8,
	/// Delay between receipt polls while waiting for confirmation
	pub confirmation_poll_interval_ms: u64,
}
