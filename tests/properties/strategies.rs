use alloy::primitives::{Address, Bytes, B256, U256};
use proptest::{option, prelude::*};

use transfer_tracker::{
	models::{EVMTransaction, NewTransaction, TerminalStatus},
	utils::tests::builders::evm::transaction::TransactionBuilder,
};

const MAX_CALL_DATA: usize = 200;

pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

pub fn address_strategy() -> impl Strategy<Value = Address> {
	any::<[u8; 20]>().prop_map(Address::from)
}

pub fn u256_strategy() -> impl Strategy<Value = U256> {
	prop_oneof![
		Just(U256::ZERO),
		any::<u64>().prop_map(U256::from),
		any::<[u8; 32]>().prop_map(U256::from_be_bytes),
	]
}

/// Call-data that is empty, random, or starts with the transfer selector
pub fn call_data_strategy() -> impl Strategy<Value = Vec<u8>> {
	prop_oneof![
		Just(Vec::new()),
		prop::collection::vec(any::<u8>(), 0..MAX_CALL_DATA),
		prop::collection::vec(any::<u8>(), 0..MAX_CALL_DATA).prop_map(|tail| {
			let mut data = TRANSFER_SELECTOR.to_vec();
			data.extend(tail);
			data
		}),
		(address_strategy(), u256_strategy()).prop_map(|(to, amount)| transfer_call(to, amount)),
	]
}

/// ABI encoding of `transfer(to, amount)`
pub fn transfer_call(to: Address, amount: U256) -> Vec<u8> {
	let mut data = TRANSFER_SELECTOR.to_vec();
	data.extend_from_slice(&[0u8; 12]);
	data.extend_from_slice(to.as_slice());
	data.extend_from_slice(&amount.to_be_bytes::<32>());
	data
}

pub fn transaction_strategy() -> impl Strategy<Value = EVMTransaction> {
	(
		any::<[u8; 32]>(),
		address_strategy(),
		option::of(address_strategy()),
		prop_oneof![Just(U256::ZERO), u256_strategy()],
		call_data_strategy(),
	)
		.prop_map(|(hash, from, to, value, input)| {
			let builder = TransactionBuilder::new()
				.hash(B256::from(hash))
				.from(from)
				.value(value)
				.input(Bytes::from(input));
			match to {
				Some(to) => builder.to(to).build(),
				None => builder.contract_creation().build(),
			}
		})
}

pub fn submission_strategy() -> impl Strategy<Value = NewTransaction> {
	(
		any::<[u8; 32]>(),
		address_strategy(),
		address_strategy(),
		"[0-9]{1,6}\\.[0-9]{1,6}",
		"[A-Z]{2,6}",
	)
		.prop_map(|(hash, sender, recipient, amount, token_symbol)| NewTransaction {
			hash: format!("{:#x}", B256::from(hash)),
			sender: sender.to_string(),
			recipient: recipient.to_string(),
			amount,
			token_symbol,
		})
}

pub fn terminal_status_strategy() -> impl Strategy<Value = TerminalStatus> {
	prop_oneof![Just(TerminalStatus::Success), Just(TerminalStatus::Failed)]
}
