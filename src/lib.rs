//! Transaction classification and lifecycle tracking for EVM chains.
//!
//! The crate classifies on-chain transactions as native coin transfers, ERC-20
//! token transfers or opaque contract calls, verifies who sent a transaction, and
//! tracks submitted transactions from a pending record to a terminal status.
//!
//! # Modules
//! - `bootstrap`: Service wiring used by the binary
//! - `models`: Data structures and configuration loading
//! - `repositories`: Configuration-backed lookups of networks and accounts
//! - `services`: Gateway, classifier, verifier and lifecycle services
//! - `utils`: Logging, metrics and helpers

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
