//! Confirmation signals for tracked transactions.
//!
//! A confirmation signal is any future that resolves once the chain outcome of a
//! transaction is known. [`ReceiptWatcher`] produces one by polling for the receipt.

use alloy::primitives::B256;
use futures::future::BoxFuture;
use std::{sync::Arc, time::Duration};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{models::Network, services::blockchain::EvmClientTrait};

/// Why a transaction did not confirm
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfirmationError {
	/// Mined, but execution failed
	#[error("Transaction reverted: {0}")]
	Reverted(String),

	/// Dropped or refused before inclusion
	#[error("Transaction rejected: {0}")]
	Rejected(String),
}

/// Polls the gateway for a transaction's receipt
///
/// Gateway failures while polling are treated as transient: a receipt that cannot
/// be read yet is not evidence that the transaction failed.
pub struct ReceiptWatcher<C: EvmClientTrait + ?Sized> {
	client: Arc<C>,
	poll_interval: Duration,
}

impl<C: EvmClientTrait + ?Sized> Clone for ReceiptWatcher<C> {
	fn clone(&self) -> Self {
		Self {
			client: self.client.clone(),
			poll_interval: self.poll_interval,
		}
	}
}

impl<C: EvmClientTrait + ?Sized + 'static> ReceiptWatcher<C> {
	pub fn new(client: Arc<C>, poll_interval: Duration) -> Self {
		Self {
			client,
			poll_interval,
		}
	}

	/// Watcher polling at the network's confirmation interval
	pub fn for_network(client: Arc<C>, network: &Network) -> Self {
		Self::new(
			client,
			Duration::from_millis(network.confirmation_poll_interval_ms),
		)
	}

	/// Resolves once a receipt for `hash` exists
	///
	/// Succeeds for a successful receipt and fails with `Reverted` otherwise. Never
	/// resolves while the transaction stays unmined.
	pub fn watch(&self, hash: B256) -> BoxFuture<'static, Result<(), ConfirmationError>> {
		let client = self.client.clone();
		let poll_interval = self.poll_interval;

		Box::pin(async move {
			loop {
				match client.get_transaction_receipt(hash).await {
					Ok(Some(receipt)) if receipt.is_success() => {
						debug!(%hash, block = ?receipt.block_number, "Transaction confirmed");
						return Ok(());
					}
					Ok(Some(receipt)) => {
						return Err(ConfirmationError::Reverted(format!(
							"{:#x} failed in block {}",
							hash,
							receipt
								.block_number
								.map(|number| number.to_string())
								.unwrap_or_else(|| "unknown".to_string())
						)));
					}
					Ok(None) => debug!(%hash, "Receipt not available yet"),
					Err(e) => warn!(%hash, "Failed to poll receipt: {}", e),
				}
				tokio::time::sleep(poll_interval).await;
			}
		})
	}
}
