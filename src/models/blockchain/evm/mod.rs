//! Ethereum Virtual Machine (EVM) blockchain specific implementations.
//!
//! This module contains data structures for EVM transactions and receipts as they
//! are returned by `eth_getTransactionByHash` and `eth_getTransactionReceipt`.

mod receipt;
mod transaction;

pub use receipt::TransactionReceipt as EVMTransactionReceipt;
pub use transaction::Transaction as EVMTransaction;
