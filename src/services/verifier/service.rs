//! Provenance verification of transactions against an expected sender.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::{
	models::{Network, VerificationVerdict},
	services::{
		blockchain::EvmClientTrait, classifier::TransactionClassifier,
		verifier::error::VerificationError,
	},
	utils::{metrics::VERIFICATIONS, parse_address, parse_hash},
};

const SENT_BY_EXPECTED: &str = "Transaction was sent from the specified wallet.";
const NOT_SENT_BY_EXPECTED: &str = "Transaction was NOT sent by the specified wallet.";

/// Checks whether a transaction was originated by an expected address
pub struct ProvenanceVerifier<C: EvmClientTrait + ?Sized> {
	client: Arc<C>,
	classifier: TransactionClassifier<C>,
}

impl<C: EvmClientTrait + ?Sized> ProvenanceVerifier<C> {
	pub fn new(client: Arc<C>, network: &Network) -> Self {
		Self {
			classifier: TransactionClassifier::new(client.clone(), network),
			client,
		}
	}

	/// Verifies that `hash` was sent by `expected_address`
	///
	/// Addresses are compared as 20-byte values, so checksummed and lowercase
	/// spellings of the same address match. An expected address that does not
	/// parse matches no sender. The classification of the transaction is
	/// attached whether or not the sender matches.
	#[instrument(skip(self))]
	pub async fn verify(
		&self,
		hash: &str,
		expected_address: &str,
	) -> Result<VerificationVerdict, VerificationError> {
		let result = self.verify_inner(hash, expected_address).await;

		let label = match &result {
			Ok(verdict) if verdict.is_valid => "valid",
			Ok(_) => "invalid",
			Err(VerificationError::InvalidInput(_)) => "bad_request",
			Err(VerificationError::NotFound(_)) => "not_found",
			Err(VerificationError::GatewayError(_)) => "gateway_error",
		};
		VERIFICATIONS.with_label_values(&[label]).inc();

		result
	}

	async fn verify_inner(
		&self,
		hash: &str,
		expected_address: &str,
	) -> Result<VerificationVerdict, VerificationError> {
		if hash.trim().is_empty() || expected_address.trim().is_empty() {
			return Err(VerificationError::invalid_input(
				"Transaction hash and expected address are required",
			));
		}

		let transaction_hash = parse_hash(hash).map_err(VerificationError::invalid_input)?;
		let expected = parse_address(expected_address).ok();

		let transaction = self
			.client
			.get_transaction(transaction_hash)
			.await
			.map_err(|e| VerificationError::gateway_error(e.to_string()))?
			.ok_or_else(|| VerificationError::not_found(format!("{:#x}", transaction_hash)))?;

		let details = self.classifier.classify(&transaction).await;
		let is_valid = expected.is_some_and(|expected| *transaction.sender() == expected);

		info!(
			hash = %transaction_hash,
			sender = %transaction.sender(),
			is_valid,
			"Verified transaction provenance"
		);

		Ok(VerificationVerdict {
			is_valid,
			message: if is_valid {
				SENT_BY_EXPECTED
			} else {
				NOT_SENT_BY_EXPECTED
			}
			.to_string(),
			details: Some(details),
		})
	}
}
