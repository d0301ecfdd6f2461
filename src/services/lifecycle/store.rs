//! Lifecycle store contract and its in-memory implementation.
//!
//! A store owns every [`TransactionRecord`]. It enforces hash uniqueness on insert
//! and applies status transitions as a per-hash compare-and-set, so only one
//! terminal status is ever accepted for a hash.

use async_trait::async_trait;
use chrono::Utc;
use std::{
	collections::{hash_map::Entry, HashMap},
	sync::{Arc, Mutex, RwLock},
};

use crate::{
	models::{NewTransaction, TerminalStatus, TransactionRecord, TransactionStatus},
	services::lifecycle::error::LifecycleError,
	utils::{are_same_address, normalize_hash},
};

/// Durable keyed store of tracked transactions
#[async_trait]
pub trait TransactionStore: Send + Sync {
	/// Creates a pending record
	///
	/// Fails with `DuplicateHash` if the hash is already recorded, leaving the
	/// existing record untouched.
	async fn insert(&self, submission: NewTransaction) -> Result<TransactionRecord, LifecycleError>;

	/// Moves a pending record to a terminal status and returns the updated record
	///
	/// Fails with `InvalidTransition` if the record is already terminal.
	async fn transition(
		&self,
		hash: &str,
		status: TerminalStatus,
	) -> Result<TransactionRecord, LifecycleError>;

	async fn get(&self, hash: &str) -> Result<Option<TransactionRecord>, LifecycleError>;

	/// Records sent by any of `senders`, newest first
	async fn list_by_sender(
		&self,
		senders: &[String],
	) -> Result<Vec<TransactionRecord>, LifecycleError>;

	/// Records sent or received by any of `addresses`, newest first
	async fn list_by_participant(
		&self,
		addresses: &[String],
	) -> Result<Vec<TransactionRecord>, LifecycleError>;

	/// Records still awaiting a terminal status, oldest first
	async fn list_pending(&self) -> Result<Vec<TransactionRecord>, LifecycleError>;
}

/// Validates a submission and builds its pending record
pub(crate) fn prepare_record(submission: NewTransaction) -> Result<TransactionRecord, LifecycleError> {
	let missing = submission.missing_fields();
	if !missing.is_empty() {
		return Err(LifecycleError::invalid_input(format!(
			"Missing required transaction fields: {}",
			missing.join(", ")
		)));
	}

	let hash = normalize_hash(&submission.hash).map_err(LifecycleError::invalid_input)?;
	let mut record = submission.into_pending(hash, Utc::now());
	record.sender = record.sender.trim().to_string();
	record.recipient = record.recipient.trim().to_string();
	Ok(record)
}

/// Normalizes a lookup key, treating a malformed hash as unknown
pub(crate) fn lookup_key(hash: &str) -> Result<String, LifecycleError> {
	normalize_hash(hash).map_err(|_| LifecycleError::not_found(hash.trim()))
}

/// Applies a terminal status to a pending record in place
pub(crate) fn apply_transition(
	record: &mut TransactionRecord,
	status: TerminalStatus,
) -> Result<(), LifecycleError> {
	if record.status.is_terminal() {
		return Err(LifecycleError::invalid_transition(format!(
			"{} is already {}, refusing {}",
			record.hash, record.status, status
		)));
	}
	record.status = status.into();
	Ok(())
}

pub(crate) fn matches_any(address: &str, candidates: &[String]) -> bool {
	candidates
		.iter()
		.any(|candidate| are_same_address(address, candidate))
}

/// Sorts newest first; ties fall back to the hash so ordering is stable
pub(crate) fn newest_first(mut records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
	records.sort_by(|a, b| {
		b.created_at
			.cmp(&a.created_at)
			.then_with(|| a.hash.cmp(&b.hash))
	});
	records
}

/// Store held in process memory
///
/// The outer map is only locked to find or create a record's slot. Each record has
/// its own lock, so transitions of different hashes never wait on each other.
#[derive(Default)]
pub struct InMemoryTransactionStore {
	records: RwLock<HashMap<String, Arc<Mutex<TransactionRecord>>>>,
}

fn poisoned<T>(_: T) -> LifecycleError {
	LifecycleError::internal_error("Transaction store lock poisoned")
}

impl InMemoryTransactionStore {
	pub fn new() -> Self {
		Self::default()
	}

	fn slot(&self, key: &str) -> Result<Option<Arc<Mutex<TransactionRecord>>>, LifecycleError> {
		Ok(self.records.read().map_err(poisoned)?.get(key).cloned())
	}

	fn snapshot(&self) -> Result<Vec<TransactionRecord>, LifecycleError> {
		let slots: Vec<_> = self
			.records
			.read()
			.map_err(poisoned)?
			.values()
			.cloned()
			.collect();

		slots
			.iter()
			.map(|slot| slot.lock().map(|record| record.clone()).map_err(poisoned))
			.collect()
	}
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
	async fn insert(&self, submission: NewTransaction) -> Result<TransactionRecord, LifecycleError> {
		let record = prepare_record(submission)?;
		let mut records = self.records.write().map_err(poisoned)?;

		match records.entry(record.hash.clone()) {
			Entry::Occupied(_) => Err(LifecycleError::duplicate_hash(record.hash)),
			Entry::Vacant(slot) => {
				slot.insert(Arc::new(Mutex::new(record.clone())));
				Ok(record)
			}
		}
	}

	async fn transition(
		&self,
		hash: &str,
		status: TerminalStatus,
	) -> Result<TransactionRecord, LifecycleError> {
		let key = lookup_key(hash)?;
		let slot = self
			.slot(&key)?
			.ok_or_else(|| LifecycleError::not_found(key.clone()))?;

		let mut record = slot.lock().map_err(poisoned)?;
		apply_transition(&mut record, status)?;
		Ok(record.clone())
	}

	async fn get(&self, hash: &str) -> Result<Option<TransactionRecord>, LifecycleError> {
		let Ok(key) = normalize_hash(hash) else {
			return Ok(None);
		};
		match self.slot(&key)? {
			Some(slot) => Ok(Some(slot.lock().map_err(poisoned)?.clone())),
			None => Ok(None),
		}
	}

	async fn list_by_sender(
		&self,
		senders: &[String],
	) -> Result<Vec<TransactionRecord>, LifecycleError> {
		let records = self
			.snapshot()?
			.into_iter()
			.filter(|record| matches_any(&record.sender, senders))
			.collect();
		Ok(newest_first(records))
	}

	async fn list_by_participant(
		&self,
		addresses: &[String],
	) -> Result<Vec<TransactionRecord>, LifecycleError> {
		let records = self
			.snapshot()?
			.into_iter()
			.filter(|record| {
				matches_any(&record.sender, addresses) || matches_any(&record.recipient, addresses)
			})
			.collect();
		Ok(newest_first(records))
	}

	async fn list_pending(&self) -> Result<Vec<TransactionRecord>, LifecycleError> {
		let mut records: Vec<_> = self
			.snapshot()?
			.into_iter()
			.filter(|record| record.status == TransactionStatus::Pending)
			.collect();
		records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
		Ok(records)
	}
}
