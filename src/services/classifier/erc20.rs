//! Recognition of ERC-20 `transfer(address,uint256)` call-data.

use alloy::{
	primitives::{Address, U256},
	sol_types::SolCall,
};

use crate::services::blockchain::IERC20;

/// Call-data that carries the ERC-20 transfer selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferCall {
	/// Arguments decoded per the transfer signature
	Decoded { to: Address, amount: U256 },
	/// Selector matched but the arguments did not decode
	Malformed(String),
}

/// Matches call-data against the ERC-20 transfer selector
///
/// Returns `None` when the selector is absent, so that any other function is left
/// to the caller. Arguments are decoded strictly: an address word with non-zero
/// padding is malformed rather than truncated to its low 20 bytes.
pub fn match_transfer_call(input: &[u8]) -> Option<TransferCall> {
	if !input.starts_with(&IERC20::transferCall::SELECTOR) {
		return None;
	}

	Some(match IERC20::transferCall::abi_decode_validate(input) {
		Ok(call) => TransferCall::Decoded {
			to: call.to,
			amount: call.amount,
		},
		Err(e) => TransferCall::Malformed(e.to_string()),
	})
}
