use mockito::{Mock, Server};
use serde_json::{json, Value};

use transfer_tracker::{models::Network, utils::tests::builders::network::NetworkBuilder};

pub const TOKEN: &str = "0x55d398326f99059ff775485246999027b3197955";
pub const SENDER: &str = "0xa7d9ddbe1f17865597fbd27ec712455208b6b76d";
pub const RECIPIENT: &str = "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb";
pub const TX_HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

/// Network whose RPC URLs are the given mock servers, in descending weight
pub fn create_test_network_with_urls(urls: Vec<&str>) -> Network {
	let mut builder = NetworkBuilder::new().rpc_urls(vec![]);
	for (index, url) in urls.into_iter().enumerate() {
		builder = builder.add_rpc_url(url, 100 - index as u32);
	}
	builder.poll_interval_ms(1).build()
}

/// Answers the `net_version` connection probe
pub async fn create_valid_server_mock_network_response(server: &mut Server) -> Mock {
	server
		.mock("POST", "/")
		.match_body(mockito::Matcher::PartialJson(json!({"method": "net_version"})))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(json!({"jsonrpc": "2.0", "id": 1, "result": "97"}).to_string())
		.create_async()
		.await
}

/// A successful JSON-RPC response carrying `result`
pub fn rpc_result(result: Value) -> String {
	json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string()
}

/// `eth_getTransactionByHash` payload with the given value and call-data
pub fn transaction_payload(value: &str, input: &str) -> Value {
	json!({
		"blockHash": "0x1d59ff54b1eb26b013ce3cb5fc9dab3705b415a67127a003c3e61eb445bb8df2",
		"blockNumber": "0x5daf3b",
		"from": SENDER,
		"gas": "0xc350",
		"gasPrice": "0x4a817c800",
		"hash": TX_HASH,
		"input": input,
		"nonce": "0x15",
		"to": TOKEN,
		"transactionIndex": "0x41",
		"value": value,
		"type": "0x0",
		"v": "0x25",
		"r": "0x1b5e176d927f8e9ab405058b2d2457392da3e20f328b16ddabcebc33eaac5fea",
		"s": "0x4ba69724e8f69de52f0125ad8b3c5c2cef33019bac3249e2c0a2192766d1721c"
	})
}

/// Call-data of `transfer(RECIPIENT, amount)`
pub fn transfer_call_data(amount: u64) -> String {
	format!(
		"0xa9059cbb000000000000000000000000{}{:064x}",
		RECIPIENT.trim_start_matches("0x"),
		amount
	)
}

/// ABI encoding of a single string return value
pub fn encoded_string(value: &str) -> String {
	let mut padded = hex::encode(value.as_bytes());
	while padded.len() % 64 != 0 || padded.is_empty() {
		padded.push('0');
	}
	format!("0x{:064x}{:064x}{}", 32, value.len(), padded)
}

/// ABI encoding of a single unsigned integer return value
pub fn encoded_uint(value: u64) -> String {
	format!("0x{:064x}", value)
}
