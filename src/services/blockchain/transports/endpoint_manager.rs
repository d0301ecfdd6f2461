//! Rotation between the configured RPC endpoints of a network.
//!
//! Requests always go to the active URL. A network failure, or a status listed in
//! [`ROTATE_ON_ERROR_CODES`], promotes the first reachable fallback URL and the
//! request is sent again. The demoted URL goes to the back of the fallback list.

use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::services::blockchain::transports::{
	RotatingTransport, TransportError, ROTATE_ON_ERROR_CODES,
};

/// Active RPC URL plus the ordered fallbacks it can be swapped with
#[derive(Clone, Debug)]
pub struct EndpointManager {
	pub active_url: Arc<RwLock<String>>,
	pub fallback_urls: Arc<RwLock<Vec<String>>>,
	client: ClientWithMiddleware,
	rotation_lock: Arc<Mutex<()>>,
}

impl EndpointManager {
	pub fn new(client: ClientWithMiddleware, active_url: &str, fallback_urls: Vec<String>) -> Self {
		Self {
			active_url: Arc::new(RwLock::new(active_url.to_string())),
			fallback_urls: Arc::new(RwLock::new(fallback_urls)),
			client,
			rotation_lock: Arc::new(Mutex::new(())),
		}
	}

	/// Promotes the first fallback URL that accepts a connection
	///
	/// Only one rotation runs at a time. A fallback that fails the connection probe
	/// is put back at the end of the list.
	pub async fn rotate_url<T: RotatingTransport>(
		&self,
		transport: &T,
	) -> Result<(), anyhow::Error> {
		let _guard = self.rotation_lock.lock().await;
		let current = self.active_url.read().await.clone();

		let candidate = {
			let mut fallbacks = self.fallback_urls.write().await;
			let position = fallbacks
				.iter()
				.position(|url| url != &current)
				.ok_or_else(|| anyhow::anyhow!("No fallback URLs available"))?;
			fallbacks.remove(position)
		};

		if let Err(e) = transport.try_connect(&candidate).await {
			self.fallback_urls.write().await.push(candidate);
			return Err(e.context("Failed to connect to fallback URL"));
		}

		transport.update_client(&candidate).await?;

		let mut active = self.active_url.write().await;
		let mut fallbacks = self.fallback_urls.write().await;
		tracing::debug!(from = %current, to = %candidate, "Rotated RPC endpoint");
		fallbacks.push(current);
		*active = candidate;
		Ok(())
	}

	/// Rotates when a fallback exists and the failure warrants it
	///
	/// `status` is `None` for network errors, which always warrant rotation.
	/// Returns whether the caller should resend the request.
	async fn try_rotate<T: RotatingTransport>(
		&self,
		transport: &T,
		status: Option<u16>,
	) -> Result<bool, anyhow::Error> {
		let has_fallback = !self.fallback_urls.read().await.is_empty();
		let warranted = status.is_none_or(|code| ROTATE_ON_ERROR_CODES.contains(&code));

		if !(has_fallback && warranted) {
			return Ok(false);
		}

		self.rotate_url(transport).await?;
		Ok(true)
	}

	async fn try_rotate_within<T: RotatingTransport>(
		&self,
		transport: &T,
		status: Option<u16>,
		rotations_left: &mut usize,
	) -> Result<bool, anyhow::Error> {
		if *rotations_left == 0 {
			return Ok(false);
		}
		*rotations_left -= 1;
		self.try_rotate(transport, status).await
	}

	/// Sends a JSON-RPC request to the active URL, rotating on failure
	pub async fn send_raw_request<T, P>(
		&self,
		transport: &T,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		T: RotatingTransport,
		P: Into<Value> + Send + Clone + Serialize,
	{
		// Each fallback gets one chance per request
		let mut rotations_left = self.fallback_urls.read().await.len();

		loop {
			let url = self.active_url.read().await.clone();
			let body = transport.customize_request(method, params.clone()).await;
			let body = serde_json::to_string(&body).map_err(|e| {
				TransportError::request_serialization(
					format!("Failed to serialize {} request", method),
					Some(Box::new(e)),
				)
			})?;

			let response = match self
				.client
				.post(url.as_str())
				.header("Content-Type", "application/json")
				.body(body)
				.send()
				.await
			{
				Ok(response) => response,
				Err(network_error) => {
					tracing::warn!(%url, "Network error while sending {}: {}", method, network_error);
					match self.try_rotate_within(transport, None, &mut rotations_left).await {
						Ok(true) => continue,
						Ok(false) => {
							return Err(TransportError::network(
								format!("Failed to send {} request", method),
								Some(network_error.into()),
							))
						}
						Err(e) => {
							return Err(TransportError::url_rotation(
								"Failed to rotate URL after network error",
								Some(e.into()),
							))
						}
					}
				}
			};

			let status = response.status();
			if !status.is_success() {
				let error_body = response.text().await.unwrap_or_default();
				tracing::warn!(%url, "Request failed with status {}: {}", status, error_body);
				match self
					.try_rotate_within(transport, Some(status.as_u16()), &mut rotations_left)
					.await
				{
					Ok(true) => continue,
					Ok(false) => return Err(TransportError::http(status, url, error_body)),
					Err(e) => {
						return Err(TransportError::url_rotation(
							"Failed to rotate URL after HTTP error",
							Some(e.into()),
						))
					}
				}
			}

			return response.json().await.map_err(|e| {
				TransportError::response_parse(
					format!("Invalid JSON in {} response", method),
					Some(Box::new(e)),
				)
			});
		}
	}
}
