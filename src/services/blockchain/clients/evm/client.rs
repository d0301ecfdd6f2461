//! EVM-compatible blockchain client implementation.
//!
//! This module provides the chain data gateway for Ethereum and other EVM-compatible
//! blockchains: transaction and receipt lookup by hash, and the ERC-20 metadata
//! reads used to enrich token transfers.

use alloy::{
	primitives::{Address, Bytes, B256},
	sol_types::SolCall,
};
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
	models::{EVMTransaction, EVMTransactionReceipt, Network},
	services::blockchain::{
		clients::evm::abi::IERC20,
		transports::{BlockchainTransport, HttpTransportClient},
		BlockChainError,
	},
};

/// Client implementation for Ethereum Virtual Machine (EVM) compatible blockchains
#[derive(Clone)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying transport client for RPC communication
	http_client: T,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(http_client: T) -> Self {
		Self { http_client }
	}
}

impl EvmClient<HttpTransportClient> {
	/// Creates a new EVM client connected to one of the network's RPC URLs
	pub async fn new(network: &Network) -> Result<Self, BlockChainError> {
		let http_client = HttpTransportClient::new(network)
			.await
			.map_err(|e| BlockChainError::connection_error(e.to_string()))?;
		Ok(Self::new_with_transport(http_client))
	}
}

/// Read-only view of an EVM chain
///
/// A `None` result means the node does not know the hash. It is never used to
/// report a failure; failures are always an `Err`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvmClientTrait: Send + Sync {
	/// Retrieves a transaction by its hash
	async fn get_transaction(
		&self,
		transaction_hash: B256,
	) -> Result<Option<EVMTransaction>, BlockChainError>;

	/// Retrieves the receipt of a mined transaction
	///
	/// Returns `None` while the transaction is still pending or unknown.
	async fn get_transaction_receipt(
		&self,
		transaction_hash: B256,
	) -> Result<Option<EVMTransactionReceipt>, BlockChainError>;

	/// Reads `symbol()` from a token contract
	async fn get_token_symbol(&self, contract: Address) -> Result<String, BlockChainError>;

	/// Reads `decimals()` from a token contract
	async fn get_token_decimals(&self, contract: Address) -> Result<u8, BlockChainError>;
}

/// Returns the `result` member of a JSON-RPC response, or the node's error
fn extract_result<'a>(response: &'a Value, method: &str) -> Result<&'a Value, BlockChainError> {
	if let Some(error) = response.get("error") {
		let message = error
			.get("message")
			.and_then(Value::as_str)
			.unwrap_or("unknown error");
		return Err(BlockChainError::request_error(format!(
			"{} failed: {}",
			method, message
		)));
	}

	response
		.get("result")
		.ok_or_else(|| BlockChainError::request_error("Missing 'result' field"))
}

impl<T: Send + Sync + Clone + BlockchainTransport> EvmClient<T> {
	/// Executes a read-only contract call against the latest block
	async fn call(&self, contract: Address, data: Vec<u8>) -> Result<Bytes, BlockChainError> {
		let params = json!([
			{
				"to": contract,
				"data": Bytes::from(data),
			},
			"latest"
		]);

		let response = self
			.http_client
			.send_raw_request("eth_call", Some(params))
			.await?;

		let result = extract_result(&response, "eth_call")?;
		serde_json::from_value(result.clone()).map_err(|e| {
			BlockChainError::request_error(format!("Failed to parse call result: {}", e))
		})
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> EvmClientTrait for EvmClient<T> {
	async fn get_transaction(
		&self,
		transaction_hash: B256,
	) -> Result<Option<EVMTransaction>, BlockChainError> {
		let response = self
			.http_client
			.send_raw_request("eth_getTransactionByHash", Some(json!([transaction_hash])))
			.await?;

		let transaction = extract_result(&response, "eth_getTransactionByHash")?;
		if transaction.is_null() {
			return Ok(None);
		}

		serde_json::from_value(transaction.clone())
			.map(Some)
			.map_err(|e| {
				BlockChainError::request_error(format!("Failed to parse transaction: {}", e))
			})
	}

	async fn get_transaction_receipt(
		&self,
		transaction_hash: B256,
	) -> Result<Option<EVMTransactionReceipt>, BlockChainError> {
		let response = self
			.http_client
			.send_raw_request(
				"eth_getTransactionReceipt",
				Some(json!([transaction_hash])),
			)
			.await?;

		let receipt = extract_result(&response, "eth_getTransactionReceipt")?;
		if receipt.is_null() {
			return Ok(None);
		}

		serde_json::from_value(receipt.clone())
			.map(Some)
			.map_err(|e| BlockChainError::request_error(format!("Failed to parse receipt: {}", e)))
	}

	async fn get_token_symbol(&self, contract: Address) -> Result<String, BlockChainError> {
		let output = self
			.call(contract, IERC20::symbolCall {}.abi_encode())
			.await?;

		IERC20::symbolCall::abi_decode_returns(&output).map_err(|e| {
			BlockChainError::request_error(format!("Failed to decode symbol of {}: {}", contract, e))
		})
	}

	async fn get_token_decimals(&self, contract: Address) -> Result<u8, BlockChainError> {
		let output = self
			.call(contract, IERC20::decimalsCall {}.abi_encode())
			.await?;

		IERC20::decimalsCall::abi_decode_returns(&output).map_err(|e| {
			BlockChainError::request_error(format!(
				"Failed to decode decimals of {}: {}",
				contract, e
			))
		})
	}
}
