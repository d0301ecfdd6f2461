use alloy::primitives::{Address, B256, U256};
use mockito::{Matcher, Server};
use serde_json::{json, Value};
use std::str::FromStr;

use crate::integration::mocks::{
	create_test_network_with_urls, create_valid_server_mock_network_response, encoded_string,
	encoded_uint, rpc_result, transaction_payload, MockEVMTransportClient, RECIPIENT, SENDER,
	TOKEN, TX_HASH,
};
use transfer_tracker::services::blockchain::{BlockChainError, EvmClient, EvmClientTrait};

fn client_with(mock: MockEVMTransportClient) -> EvmClient<MockEVMTransportClient> {
	EvmClient::new_with_transport(mock)
}

fn tx_hash() -> B256 {
	B256::from_str(TX_HASH).unwrap()
}

#[tokio::test]
async fn test_get_transaction() {
	let mut mock = MockEVMTransportClient::new();
	mock.expect_send_raw_request()
		.withf(|method, params| {
			method == "eth_getTransactionByHash"
				&& params.as_ref() == Some(&json!([TX_HASH]))
		})
		.times(1)
		.returning(|_, _| {
			Ok(json!({
				"jsonrpc": "2.0",
				"id": 1,
				"result": transaction_payload("0xde0b6b3a7640000", "0x")
			}))
		});

	let transaction = client_with(mock)
		.get_transaction(tx_hash())
		.await
		.unwrap()
		.unwrap();

	assert_eq!(transaction.hash, tx_hash());
	assert_eq!(transaction.from, Address::from_str(SENDER).unwrap());
	assert_eq!(transaction.value, U256::from(10u64).pow(U256::from(18)));
	assert!(transaction.input.is_empty());
}

#[tokio::test]
async fn test_unknown_transaction_is_none() {
	let mut mock = MockEVMTransportClient::new();
	mock.expect_send_raw_request()
		.returning(|_, _| Ok(json!({"jsonrpc": "2.0", "id": 1, "result": null})));

	let client = client_with(mock);
	assert!(client.get_transaction(tx_hash()).await.unwrap().is_none());
	assert!(client
		.get_transaction_receipt(tx_hash())
		.await
		.unwrap()
		.is_none());
}

#[tokio::test]
async fn test_node_error_is_request_error() {
	let mut mock = MockEVMTransportClient::new();
	mock.expect_send_raw_request().returning(|_, _| {
		Ok(json!({
			"jsonrpc": "2.0",
			"id": 1,
			"error": {"code": -32000, "message": "header not found"}
		}))
	});

	let result = client_with(mock).get_transaction(tx_hash()).await;
	assert!(matches!(result, Err(BlockChainError::RequestError(msg)) if msg.contains("header not found")));
}

#[tokio::test]
async fn test_malformed_transaction_is_request_error() {
	let mut mock = MockEVMTransportClient::new();
	mock.expect_send_raw_request().returning(|_, _| {
		Ok(json!({"jsonrpc": "2.0", "id": 1, "result": {"hash": "not-a-hash"}}))
	});

	let result = client_with(mock).get_transaction(tx_hash()).await;
	assert!(matches!(result, Err(BlockChainError::RequestError(_))));
}

#[tokio::test]
async fn test_get_transaction_receipt() {
	let mut mock = MockEVMTransportClient::new();
	mock.expect_send_raw_request()
		.withf(|method, _| method == "eth_getTransactionReceipt")
		.returning(|_, _| {
			Ok(json!({
				"jsonrpc": "2.0",
				"id": 1,
				"result": {
					"transactionHash": TX_HASH,
					"blockNumber": "0x10",
					"status": "0x0",
					"logs": []
				}
			}))
		});

	let receipt = client_with(mock)
		.get_transaction_receipt(tx_hash())
		.await
		.unwrap()
		.unwrap();
	assert!(!receipt.is_success());
}

#[tokio::test]
async fn test_token_metadata_calls() {
	let mut mock = MockEVMTransportClient::new();
	mock.expect_send_raw_request()
		.withf(|method, params| {
			method == "eth_call" && call_data(params).as_deref() == Some("0x95d89b41")
		})
		.times(1)
		.returning(|_, _| {
			Ok(json!({"jsonrpc": "2.0", "id": 1, "result": encoded_string("USDT")}))
		});
	mock.expect_send_raw_request()
		.withf(|method, params| {
			method == "eth_call" && call_data(params).as_deref() == Some("0x313ce567")
		})
		.times(1)
		.returning(|_, _| Ok(json!({"jsonrpc": "2.0", "id": 1, "result": encoded_uint(18)})));

	let client = client_with(mock);
	let token = Address::from_str(TOKEN).unwrap();
	assert_eq!(client.get_token_symbol(token).await.unwrap(), "USDT");
	assert_eq!(client.get_token_decimals(token).await.unwrap(), 18);
}

#[tokio::test]
async fn test_non_token_contract_metadata_fails() {
	let mut mock = MockEVMTransportClient::new();
	mock.expect_send_raw_request()
		.returning(|_, _| Ok(json!({"jsonrpc": "2.0", "id": 1, "result": "0x"})));

	let client = client_with(mock);
	let contract = Address::from_str(RECIPIENT).unwrap();
	assert!(client.get_token_symbol(contract).await.is_err());
	assert!(client.get_token_decimals(contract).await.is_err());
}

#[tokio::test]
async fn test_http_client_end_to_end() {
	let mut server = Server::new_async().await;
	let probe = create_valid_server_mock_network_response(&mut server).await;
	let lookup = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(
			json!({"method": "eth_getTransactionByHash"}),
		))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(rpc_result(transaction_payload("0x0", "0x")))
		.expect(1)
		.create_async()
		.await;

	let network = create_test_network_with_urls(vec![server.url().as_str()]);
	let client = EvmClient::new(&network).await.unwrap();
	let transaction = client.get_transaction(tx_hash()).await.unwrap().unwrap();

	assert_eq!(transaction.to, Some(Address::from_str(TOKEN).unwrap()));
	probe.assert();
	lookup.assert();
}

#[tokio::test]
async fn test_http_client_without_reachable_url() {
	let network = create_test_network_with_urls(vec!["http://127.0.0.1:1"]);
	let result = EvmClient::new(&network).await;
	assert!(matches!(result, Err(BlockChainError::ConnectionError(_))));
}

fn call_data(params: &Option<Value>) -> Option<String> {
	params
		.as_ref()?
		.get(0)?
		.get("data")?
		.as_str()
		.map(str::to_string)
}
