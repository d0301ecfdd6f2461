//! Provenance verification service.
//!
//! Answers whether a transaction hash was sent by a given address, independently of
//! whether the hash is tracked by the lifecycle store.

mod error;
mod service;

pub use error::VerificationError;
pub use service::ProvenanceVerifier;
