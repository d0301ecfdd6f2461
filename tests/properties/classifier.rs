use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use proptest::{prelude::*, test_runner::Config};
use std::sync::Arc;

use crate::properties::strategies::{
	address_strategy, call_data_strategy, transaction_strategy, transfer_call, u256_strategy,
	TRANSFER_SELECTOR,
};
use transfer_tracker::{
	models::{EVMTransaction, EVMTransactionReceipt, TransferKind},
	services::{
		blockchain::{BlockChainError, EvmClientTrait},
		classifier::{match_transfer_call, TransactionClassifier, TransferCall},
	},
	utils::tests::builders::network::NetworkBuilder,
};

/// Gateway whose token contracts never answer metadata reads
struct SilentTokenClient;

#[async_trait]
impl EvmClientTrait for SilentTokenClient {
	async fn get_transaction(&self, _: B256) -> Result<Option<EVMTransaction>, BlockChainError> {
		Ok(None)
	}

	async fn get_transaction_receipt(
		&self,
		_: B256,
	) -> Result<Option<EVMTransactionReceipt>, BlockChainError> {
		Ok(None)
	}

	async fn get_token_symbol(&self, _: Address) -> Result<String, BlockChainError> {
		Err(BlockChainError::request_error("execution reverted"))
	}

	async fn get_token_decimals(&self, _: Address) -> Result<u8, BlockChainError> {
		Err(BlockChainError::request_error("execution reverted"))
	}
}

fn classify(transaction: &EVMTransaction) -> transfer_tracker::models::ClassifiedTransfer {
	let classifier = TransactionClassifier::new(
		Arc::new(SilentTokenClient),
		&NetworkBuilder::new().build(),
	);
	tokio::runtime::Builder::new_current_thread()
		.build()
		.unwrap()
		.block_on(classifier.classify(transaction))
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_match_transfer_call_is_total(input in call_data_strategy()) {
		let matched = match_transfer_call(&input);
		prop_assert_eq!(matched.is_some(), input.starts_with(&TRANSFER_SELECTOR));
	}

	#[test]
	fn test_well_formed_transfer_decodes(to in address_strategy(), amount in u256_strategy()) {
		match match_transfer_call(&transfer_call(to, amount)) {
			Some(TransferCall::Decoded { to: decoded_to, amount: decoded_amount }) => {
				prop_assert_eq!(decoded_to, to);
				prop_assert_eq!(decoded_amount, amount);
			}
			other => prop_assert!(false, "expected decoded transfer, got {:?}", other),
		}
	}

	#[test]
	fn test_short_transfer_call_is_malformed(len in 0usize..64) {
		let mut input = TRANSFER_SELECTOR.to_vec();
		input.extend(std::iter::repeat(0u8).take(len));
		prop_assert!(matches!(match_transfer_call(&input), Some(TransferCall::Malformed(_))));
	}

	#[test]
	fn test_dirty_address_padding_is_malformed(
		to in address_strategy(),
		amount in u256_strategy(),
		padding in prop::array::uniform12(any::<u8>()).prop_filter("non-zero padding", |p| p.iter().any(|b| *b != 0)),
	) {
		let mut input = transfer_call(to, amount);
		input[4..16].copy_from_slice(&padding);
		prop_assert!(matches!(match_transfer_call(&input), Some(TransferCall::Malformed(_))));
	}

	#[test]
	fn test_classification_precedence(transaction in transaction_strategy()) {
		let transfer = classify(&transaction);
		prop_assert_eq!(transfer.sender, transaction.from);

		let expected = if !transaction.value.is_zero() {
			TransferKind::NativeCoin
		} else if matches!(
			match_transfer_call(&transaction.input),
			Some(TransferCall::Decoded { .. })
		) && transaction.to.is_some()
		{
			TransferKind::FungibleToken
		} else {
			TransferKind::OpaqueInteraction
		};
		prop_assert_eq!(transfer.kind, expected);

		match transfer.kind {
			TransferKind::NativeCoin => {
				prop_assert_eq!(transfer.token_symbol, "BNB");
				prop_assert_eq!(transfer.recipient, transaction.to);
			}
			TransferKind::FungibleToken => {
				prop_assert_eq!(transfer.token_symbol, "Unknown Token");
				prop_assert!(transfer.amount.contains('.'));
			}
			TransferKind::OpaqueInteraction => {
				prop_assert_eq!(transfer.amount, "N/A");
				prop_assert!(
					transfer.token_symbol == "Contract Interaction"
						|| transfer.token_symbol == "Complex Interaction"
				);
			}
		}
	}
}
