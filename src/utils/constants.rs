//! Constants shared across the crate.

/// Token symbol reported when a token contract does not answer `symbol()`
pub const UNKNOWN_TOKEN_SYMBOL: &str = "Unknown Token";

/// Decimals assumed when a token contract does not answer `decimals()`
pub const FALLBACK_TOKEN_DECIMALS: u8 = 18;

/// Token symbol of a call that carries the transfer selector but cannot be decoded
pub const COMPLEX_INTERACTION_SYMBOL: &str = "Complex Interaction";

/// Token symbol of any other contract call
pub const CONTRACT_INTERACTION_SYMBOL: &str = "Contract Interaction";

/// Amount reported when a transaction moves no decodable value
pub const NOT_APPLICABLE_AMOUNT: &str = "N/A";

/// Network used when `NETWORK` is not set
pub const DEFAULT_NETWORK_SLUG: &str = "bsc_testnet";

/// Directory of the durable transaction store when `STORAGE_DIR` is not set
pub const DEFAULT_STORAGE_DIR: &str = "data/transactions";

/// Address the metrics server binds to outside of Docker
pub const DEFAULT_METRICS_ADDRESS: &str = "127.0.0.1:8081";
