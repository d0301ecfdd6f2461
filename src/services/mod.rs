//! Core services of the transfer tracker.
//!
//! - `blockchain`: JSON-RPC gateway to an EVM node
//! - `classifier`: turns transactions into classified transfers
//! - `verifier`: checks who sent a transaction
//! - `lifecycle`: records submitted transactions and resolves their status

pub mod blockchain;
pub mod classifier;
pub mod lifecycle;
pub mod verifier;
