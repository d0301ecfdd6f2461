//! HTTP transport implementation for EVM JSON-RPC nodes.
//!
//! The client connects to the highest weighted RPC URL that answers a
//! `net_version` probe and keeps the others as fallbacks for the endpoint manager.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use reqwest_middleware::ClientBuilder;
use reqwest_retry::{policies::ExponentialBackoff, Jitter, RetryTransientMiddleware};
use serde::Serialize;
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use url::Url;

use crate::{
	models::Network,
	services::blockchain::transports::{
		BlockchainTransport, EndpointManager, RotatingTransport, TransientErrorRetryStrategy,
		TransportError,
	},
};

/// JSON-RPC over HTTP with retries and endpoint rotation
///
/// Cheap to clone; clones share the connection pool and the active URL.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// Plain client used for connection probes, bypassing the retry middleware
	pub client: Arc<Client>,
	endpoint_manager: EndpointManager,
}

fn probe_request() -> Value {
	json!({
		"jsonrpc": "2.0",
		"id": 1,
		"method": "net_version",
		"params": []
	})
}

fn default_retry_policy() -> ExponentialBackoff {
	ExponentialBackoff::builder()
		.base(2)
		.retry_bounds(Duration::from_millis(250), Duration::from_secs(10))
		.jitter(Jitter::Full)
		.build_with_max_retries(3)
}

impl HttpTransportClient {
	/// Connects to the first reachable RPC URL of `network`, in descending weight order
	///
	/// URLs with a zero weight or an unsupported type are never used.
	pub async fn new(network: &Network) -> Result<Self, anyhow::Error> {
		let mut rpc_urls: Vec<_> = network
			.rpc_urls
			.iter()
			.filter(|rpc_url| rpc_url.type_ == "rpc" && rpc_url.weight > 0)
			.collect();
		rpc_urls.sort_by(|a, b| b.weight.cmp(&a.weight));

		let http_client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(32)
			.timeout(Duration::from_secs(30))
			.connect_timeout(Duration::from_secs(20))
			.build()
			.context("Failed to create HTTP client")?;

		let middleware_client = ClientBuilder::new(http_client.clone())
			.with(RetryTransientMiddleware::new_with_policy_and_strategy(
				default_retry_policy(),
				TransientErrorRetryStrategy,
			))
			.build();

		for rpc_url in rpc_urls.iter() {
			let Ok(url) = Url::parse(&rpc_url.url) else {
				continue;
			};

			let reachable = match http_client.post(url).json(&probe_request()).send().await {
				Ok(response) => response.status().is_success(),
				Err(_) => false,
			};
			if !reachable {
				tracing::debug!(url = %rpc_url.url, "RPC URL failed connection probe");
				continue;
			}

			let fallback_urls = rpc_urls
				.iter()
				.filter(|other| other.url != rpc_url.url)
				.map(|other| other.url.clone())
				.collect();

			return Ok(Self {
				client: Arc::new(http_client),
				endpoint_manager: EndpointManager::new(
					middleware_client,
					rpc_url.url.as_ref(),
					fallback_urls,
				),
			});
		}

		Err(anyhow::anyhow!(
			"All RPC URLs failed to connect for network {}",
			network.slug
		))
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	async fn get_current_url(&self) -> String {
		self.endpoint_manager.active_url.read().await.clone()
	}

	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.endpoint_manager
			.send_raw_request(self, method, params)
			.await
	}
}

#[async_trait]
impl RotatingTransport for HttpTransportClient {
	async fn try_connect(&self, url: &str) -> Result<(), anyhow::Error> {
		let url = Url::parse(url).map_err(|_| anyhow::anyhow!("Invalid URL: {}", url))?;

		let response = self
			.client
			.post(url.clone())
			.json(&probe_request())
			.send()
			.await
			.map_err(|e| anyhow::anyhow!("Failed to connect to {}: {}", url, e))?;

		if !response.status().is_success() {
			return Err(anyhow::anyhow!(
				"Failed to connect to {}: {}",
				url,
				response.status().as_u16()
			));
		}
		Ok(())
	}

	async fn update_client(&self, url: &str) -> Result<(), anyhow::Error> {
		let parsed = Url::parse(url).map_err(|_| anyhow::anyhow!("Invalid URL: {}", url))?;
		let mut active_url = self.endpoint_manager.active_url.write().await;
		*active_url = parsed.as_str().trim_end_matches('/').to_string();
		Ok(())
	}
}
