//! Transaction classification service.
//!
//! Turns a raw EVM transaction into a [`ClassifiedTransfer`](crate::models::ClassifiedTransfer):
//! a native coin transfer, an ERC-20 token transfer, or an opaque contract call.
//! Classification never fails; every decoding step degrades to a less specific kind.

mod erc20;
mod service;

pub use erc20::{match_transfer_call, TransferCall};
pub use service::TransactionClassifier;
