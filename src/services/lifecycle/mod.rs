//! Lifecycle tracking of submitted transactions.
//!
//! - `store`: the [`TransactionStore`] contract and an in-memory implementation
//! - `file_store`: a durable store keeping one JSON file per record
//! - `confirmation`: confirmation signals derived from transaction receipts
//! - `orchestrator`: ties pending records to their confirmation signals

mod confirmation;
mod error;
mod file_store;
mod orchestrator;
mod store;

pub use confirmation::{ConfirmationError, ReceiptWatcher};
pub use error::LifecycleError;
pub use file_store::FileTransactionStore;
pub use orchestrator::{derive_submission, LifecycleOrchestrator, TrackingHandle};
pub use store::{InMemoryTransactionStore, TransactionStore};
