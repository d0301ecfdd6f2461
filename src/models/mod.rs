//! Domain models and data structures for transfer classification and tracking.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `blockchain`: Chain-level data as returned by the node (EVM transactions and receipts)
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (Network, Account, ClassifiedTransfer, TransactionRecord)

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::evm::{EVMTransaction, EVMTransactionReceipt};

// Re-export core types
pub use core::{
	Account, ClassifiedTransfer, NewTransaction, Network, Outcome, RpcUrl, TerminalStatus,
	TransactionRecord, TransactionStatus, TransferKind, VerificationVerdict,
};

// Re-export config types
pub use config::{ConfigError, ConfigLoader};
