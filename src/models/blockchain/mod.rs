//! Blockchain-specific model implementations.
//!
//! Only EVM-compatible chains are supported. The types here mirror the JSON-RPC
//! payloads closely and are read-only to the rest of the crate.

pub mod evm;
