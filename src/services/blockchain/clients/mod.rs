//! Blockchain client implementations.
//!
//! Contains the EVM client used as the chain data gateway.

mod evm {
	pub mod abi;
	pub mod client;
}

pub use evm::abi::IERC20;
pub use evm::client::{EvmClient, EvmClientTrait};

#[cfg(test)]
pub use evm::client::MockEvmClientTrait;
