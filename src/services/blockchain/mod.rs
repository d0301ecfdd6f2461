//! Blockchain client interfaces and implementations.
//!
//! Provides the chain data gateway used by the rest of the crate. Includes:
//!
//! - The EVM client trait and its JSON-RPC implementation
//! - The HTTP transport with retries and endpoint rotation
//! - Error handling for blockchain operations

mod clients;
mod error;
mod transports;

pub use clients::{EvmClient, EvmClientTrait, IERC20};
pub use error::BlockChainError;
pub use transports::{
	BlockchainTransport, EndpointManager, HttpTransportClient, RotatingTransport,
	TransientErrorRetryStrategy, TransportError, ROTATE_ON_ERROR_CODES,
};

#[cfg(test)]
pub use clients::MockEvmClientTrait;
