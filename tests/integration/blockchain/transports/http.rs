use mockito::Server;
use serde_json::json;

use crate::integration::mocks::{
	create_test_network_with_urls, create_valid_server_mock_network_response,
};
use transfer_tracker::{
	models::RpcUrl,
	services::blockchain::{BlockchainTransport, HttpTransportClient, RotatingTransport},
	utils::tests::builders::network::NetworkBuilder,
};

#[tokio::test]
async fn test_connects_to_highest_weight_url() {
	let mut preferred = Server::new_async().await;
	let mut other = Server::new_async().await;
	let preferred_probe = create_valid_server_mock_network_response(&mut preferred).await;
	create_valid_server_mock_network_response(&mut other).await;

	let network = create_test_network_with_urls(vec![preferred.url().as_str(), other.url().as_str()]);
	let transport = HttpTransportClient::new(&network).await.unwrap();

	assert_eq!(transport.get_current_url().await, preferred.url());
	preferred_probe.assert();
}

#[tokio::test]
async fn test_skips_unreachable_url() {
	let mut reachable = Server::new_async().await;
	let probe = create_valid_server_mock_network_response(&mut reachable).await;

	let network = create_test_network_with_urls(vec!["http://127.0.0.1:1", reachable.url().as_str()]);
	let transport = HttpTransportClient::new(&network).await.unwrap();

	assert_eq!(transport.get_current_url().await, reachable.url());
	probe.assert();
}

#[tokio::test]
async fn test_fails_when_no_url_answers() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/")
		.with_status(500)
		.create_async()
		.await;

	let network = create_test_network_with_urls(vec![server.url().as_str(), "not a url"]);
	let result = HttpTransportClient::new(&network).await;

	assert!(result.is_err());
	assert!(result
		.unwrap_err()
		.to_string()
		.contains("All RPC URLs failed to connect"));
}

#[tokio::test]
async fn test_ignores_zero_weight_and_foreign_urls() {
	let mut server = Server::new_async().await;
	create_valid_server_mock_network_response(&mut server).await;

	let network = NetworkBuilder::new()
		.rpc_urls(vec![
			RpcUrl {
				type_: "rpc".to_string(),
				url: server.url(),
				weight: 0,
			},
			RpcUrl {
				type_: "ws".to_string(),
				url: server.url(),
				weight: 100,
			},
		])
		.build();

	assert!(HttpTransportClient::new(&network).await.is_err());
}

#[tokio::test]
async fn test_send_raw_request_wraps_json_rpc_envelope() {
	let mut server = Server::new_async().await;
	create_valid_server_mock_network_response(&mut server).await;
	let request = server
		.mock("POST", "/")
		.match_body(mockito::Matcher::Json(json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": "eth_getTransactionReceipt",
			"params": ["0x01"]
		})))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"jsonrpc": "2.0", "id": 1, "result": null}"#)
		.expect(1)
		.create_async()
		.await;

	let network = create_test_network_with_urls(vec![server.url().as_str()]);
	let transport = HttpTransportClient::new(&network).await.unwrap();
	let response = transport
		.send_raw_request("eth_getTransactionReceipt", Some(json!(["0x01"])))
		.await
		.unwrap();

	assert!(response["result"].is_null());
	request.assert();
}

#[tokio::test]
async fn test_try_connect() {
	let mut server = Server::new_async().await;
	create_valid_server_mock_network_response(&mut server).await;

	let network = create_test_network_with_urls(vec![server.url().as_str()]);
	let transport = HttpTransportClient::new(&network).await.unwrap();

	assert!(transport.try_connect(&server.url()).await.is_ok());
	assert!(transport.try_connect("not a url").await.is_err());
	assert!(transport.try_connect("http://127.0.0.1:1").await.is_err());
}
