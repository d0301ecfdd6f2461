//! Core domain models for transfer classification and lifecycle tracking.
//!
//! This module contains the fundamental data structures that represent:
//! - Networks: Blockchain network definitions and connection details
//! - Accounts: Username to wallet address ownership
//! - Transfers: The normalized result of classifying a transaction
//! - Records: Persisted lifecycle state of submitted transactions
//! - Verdicts and outcomes: Results surfaced to callers

mod account;
mod network;
mod outcome;
mod record;
mod transfer;
mod verification;

pub use account::Account;
pub use network::{Network, RpcUrl};
pub use outcome::Outcome;
pub use record::{NewTransaction, TerminalStatus, TransactionRecord, TransactionStatus};
pub use transfer::{ClassifiedTransfer, TransferKind};
pub use verification::VerificationVerdict;
