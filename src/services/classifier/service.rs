//! Classification of EVM transactions into transfers.

use alloy::primitives::{Address, U256};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
	models::{ClassifiedTransfer, EVMTransaction, Network, TransferKind},
	services::{
		blockchain::EvmClientTrait,
		classifier::erc20::{match_transfer_call, TransferCall},
	},
	utils::{
		constants::{
			COMPLEX_INTERACTION_SYMBOL, CONTRACT_INTERACTION_SYMBOL, FALLBACK_TOKEN_DECIMALS,
			NOT_APPLICABLE_AMOUNT, UNKNOWN_TOKEN_SYMBOL,
		},
		format_units,
		metrics::TRANSFERS_CLASSIFIED,
	},
};

/// Classifies transactions of one network
///
/// Native coin amounts are scaled with the network's native decimals. Token
/// metadata is read through the gateway on every token transfer.
pub struct TransactionClassifier<C: EvmClientTrait + ?Sized> {
	client: Arc<C>,
	native_symbol: String,
	native_decimals: u8,
}

impl<C: EvmClientTrait + ?Sized> TransactionClassifier<C> {
	pub fn new(client: Arc<C>, network: &Network) -> Self {
		Self {
			client,
			native_symbol: network.native_symbol.clone(),
			native_decimals: network.native_decimals,
		}
	}

	/// Classifies a transaction
	///
	/// Precedence: a non-zero native value wins, then a decodable ERC-20
	/// `transfer` call, then an opaque interaction.
	#[instrument(skip_all, fields(hash = %transaction.hash()))]
	pub async fn classify(&self, transaction: &EVMTransaction) -> ClassifiedTransfer {
		let transfer = if !transaction.value().is_zero() {
			self.native_transfer(transaction)
		} else {
			match (
				match_transfer_call(transaction.input()),
				transaction.to().copied(),
			) {
				(Some(TransferCall::Decoded { to, amount }), Some(contract)) => {
					self.token_transfer(transaction, contract, to, amount).await
				}
				(Some(TransferCall::Malformed(reason)), _) => {
					debug!("Transfer selector with undecodable arguments: {}", reason);
					opaque(transaction, COMPLEX_INTERACTION_SYMBOL)
				}
				(Some(TransferCall::Decoded { .. }), None) => {
					debug!("Transfer call-data in a contract creation");
					opaque(transaction, COMPLEX_INTERACTION_SYMBOL)
				}
				(None, _) => opaque(transaction, CONTRACT_INTERACTION_SYMBOL),
			}
		};

		TRANSFERS_CLASSIFIED
			.with_label_values(&[transfer.kind.as_str()])
			.inc();
		debug!(kind = %transfer.kind, "Classified transaction");
		transfer
	}

	fn native_transfer(&self, transaction: &EVMTransaction) -> ClassifiedTransfer {
		ClassifiedTransfer {
			kind: TransferKind::NativeCoin,
			sender: *transaction.sender(),
			recipient: transaction.to().copied(),
			amount: format_units(*transaction.value(), self.native_decimals),
			token_symbol: self.native_symbol.clone(),
		}
	}

	/// Builds a token transfer, enriched with the contract's metadata
	///
	/// Symbol and decimals are read concurrently and each falls back on its own
	/// when the read fails.
	async fn token_transfer(
		&self,
		transaction: &EVMTransaction,
		contract: Address,
		recipient: Address,
		amount: U256,
	) -> ClassifiedTransfer {
		let (symbol, decimals) = tokio::join!(
			self.client.get_token_symbol(contract),
			self.client.get_token_decimals(contract)
		);

		let symbol = symbol.unwrap_or_else(|e| {
			debug!(%contract, "Token symbol unavailable: {}", e);
			UNKNOWN_TOKEN_SYMBOL.to_string()
		});
		let decimals = decimals.unwrap_or_else(|e| {
			debug!(%contract, "Token decimals unavailable: {}", e);
			FALLBACK_TOKEN_DECIMALS
		});

		ClassifiedTransfer {
			kind: TransferKind::FungibleToken,
			sender: *transaction.sender(),
			recipient: Some(recipient),
			amount: format_units(amount, decimals),
			token_symbol: symbol,
		}
	}
}

fn opaque(transaction: &EVMTransaction, label: &str) -> ClassifiedTransfer {
	ClassifiedTransfer {
		kind: TransferKind::OpaqueInteraction,
		sender: *transaction.sender(),
		recipient: transaction.to().copied(),
		amount: NOT_APPLICABLE_AMOUNT.to_string(),
		token_symbol: label.to_string(),
	}
}
