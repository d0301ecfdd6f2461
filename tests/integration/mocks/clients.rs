//! Mock implementation of the chain data gateway.
//!
//! [`MockEvmClientTrait`] stands in for a connected EVM client so that services
//! can be tested without a node.

use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use mockall::mock;

use transfer_tracker::{
	models::{EVMTransaction, EVMTransactionReceipt},
	services::blockchain::{BlockChainError, EvmClientTrait},
};

mock! {
	/// Mock implementation of the EVM client trait.
	pub EvmClientTrait {}

	#[async_trait]
	impl EvmClientTrait for EvmClientTrait {
		async fn get_transaction(
			&self,
			transaction_hash: B256,
		) -> Result<Option<EVMTransaction>, BlockChainError>;

		async fn get_transaction_receipt(
			&self,
			transaction_hash: B256,
		) -> Result<Option<EVMTransactionReceipt>, BlockChainError>;

		async fn get_token_symbol(&self, contract: Address) -> Result<String, BlockChainError>;

		async fn get_token_decimals(&self, contract: Address) -> Result<u8, BlockChainError>;
	}
}
