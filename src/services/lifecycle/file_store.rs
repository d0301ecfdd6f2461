//! File-backed lifecycle store.
//!
//! Each record lives in `{dir}/{hash}.json`. New records are written to a temp file
//! and hard-linked into place, so the link fails atomically when the hash already
//! exists. Transitions are decided the same way: the terminal record is linked to
//! `{dir}/{hash}.terminal`, which only one writer can create no matter how many
//! processes share the directory. The marker is authoritative; `{hash}.json` is
//! rewritten afterwards so that listings see the terminal status.

use async_trait::async_trait;
use std::{
	io::ErrorKind,
	path::{Path, PathBuf},
	sync::atomic::{AtomicU64, Ordering},
};
use tokio::fs;
use tracing::{debug, warn};

use crate::{
	models::{NewTransaction, TerminalStatus, TransactionRecord, TransactionStatus},
	services::lifecycle::{
		error::LifecycleError,
		store::{
			apply_transition, lookup_key, matches_any, newest_first, prepare_record,
			TransactionStore,
		},
	},
	utils::normalize_hash,
};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Store keeping one JSON document per record in a directory
pub struct FileTransactionStore {
	dir: PathBuf,
}

impl FileTransactionStore {
	/// Opens the store, creating `dir` if needed
	pub fn new(dir: impl Into<PathBuf>) -> Result<Self, LifecycleError> {
		let dir = dir.into();
		std::fs::create_dir_all(&dir).map_err(|e| {
			LifecycleError::storage_error(format!(
				"Failed to create storage directory {}: {}",
				dir.display(),
				e
			))
		})?;

		Ok(Self { dir })
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	fn record_path(&self, key: &str) -> PathBuf {
		self.dir.join(format!("{}.json", key))
	}

	fn marker_path(&self, key: &str) -> PathBuf {
		self.dir.join(format!("{}.terminal", key))
	}

	fn temp_path(&self, key: &str) -> PathBuf {
		let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
		self.dir
			.join(format!(".{}.{}.{}.tmp", key, std::process::id(), counter))
	}

	async fn write_temp(&self, record: &TransactionRecord) -> Result<PathBuf, LifecycleError> {
		let temp = self.temp_path(&record.hash);
		let contents = serde_json::to_vec_pretty(record)?;
		if let Err(e) = fs::write(&temp, contents).await {
			let _ = fs::remove_file(&temp).await;
			return Err(e.into());
		}
		Ok(temp)
	}

	/// Publishes `record` at `target` unless something is already there
	///
	/// Returns `false` when another writer got there first.
	async fn create_exclusive(
		&self,
		record: &TransactionRecord,
		target: &Path,
	) -> Result<bool, LifecycleError> {
		let temp = self.write_temp(record).await?;
		let linked = fs::hard_link(&temp, target).await;
		let _ = fs::remove_file(&temp).await;

		match linked {
			Ok(()) => Ok(true),
			Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
			Err(e) => Err(e.into()),
		}
	}

	/// Current contents of a record, preferring its terminal marker
	async fn read_contents(&self, key: &str) -> Result<Option<Vec<u8>>, LifecycleError> {
		match read_file(&self.marker_path(key)).await? {
			Some(contents) => Ok(Some(contents)),
			None => read_file(&self.record_path(key)).await,
		}
	}

	async fn read_record(&self, key: &str) -> Result<Option<TransactionRecord>, LifecycleError> {
		match self.read_contents(key).await? {
			Some(contents) => Ok(Some(serde_json::from_slice(&contents)?)),
			None => Ok(None),
		}
	}

	async fn load_all(&self) -> Result<Vec<TransactionRecord>, LifecycleError> {
		let pattern = format!(
			"{}/0x*.json",
			glob::Pattern::escape(&self.dir.to_string_lossy())
		);
		let paths = glob::glob(&pattern)
			.map_err(|e| LifecycleError::storage_error(format!("Invalid storage path: {}", e)))?;

		let mut records = Vec::new();
		for entry in paths {
			let path = entry.map_err(|e| LifecycleError::storage_error(e.to_string()))?;
			let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
				continue;
			};
			// None when removed between listing and reading
			let Some(contents) = self.read_contents(key).await? else {
				continue;
			};
			match serde_json::from_slice::<TransactionRecord>(&contents) {
				Ok(record) => records.push(record),
				Err(e) => {
					warn!(path = %path.display(), "Skipping unreadable record: {}", e);
				}
			}
		}
		Ok(records)
	}
}

async fn read_file(path: &Path) -> Result<Option<Vec<u8>>, LifecycleError> {
	match fs::read(path).await {
		Ok(contents) => Ok(Some(contents)),
		Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
		Err(e) => Err(e.into()),
	}
}

#[async_trait]
impl TransactionStore for FileTransactionStore {
	async fn insert(&self, submission: NewTransaction) -> Result<TransactionRecord, LifecycleError> {
		let record = prepare_record(submission)?;

		if self
			.create_exclusive(&record, &self.record_path(&record.hash))
			.await?
		{
			debug!(hash = %record.hash, "Stored pending record");
			Ok(record)
		} else {
			Err(LifecycleError::duplicate_hash(record.hash))
		}
	}

	async fn transition(
		&self,
		hash: &str,
		status: TerminalStatus,
	) -> Result<TransactionRecord, LifecycleError> {
		let key = lookup_key(hash)?;

		let mut record = self
			.read_record(&key)
			.await?
			.ok_or_else(|| LifecycleError::not_found(key.clone()))?;
		apply_transition(&mut record, status)?;

		if !self.create_exclusive(&record, &self.marker_path(&key)).await? {
			let current = self
				.read_record(&key)
				.await?
				.ok_or_else(|| LifecycleError::not_found(key.clone()))?;
			return Err(LifecycleError::invalid_transition(format!(
				"{} is already {}, refusing {}",
				key, current.status, status
			)));
		}

		// The marker already decided the outcome; a failed rewrite only leaves the
		// listing copy stale.
		let temp = self.write_temp(&record).await?;
		if let Err(e) = fs::rename(&temp, self.record_path(&key)).await {
			let _ = fs::remove_file(&temp).await;
			warn!(hash = %key, "Failed to refresh record after transition: {}", e);
		}

		debug!(hash = %key, %status, "Stored status transition");
		Ok(record)
	}

	async fn get(&self, hash: &str) -> Result<Option<TransactionRecord>, LifecycleError> {
		match normalize_hash(hash) {
			Ok(key) => self.read_record(&key).await,
			Err(_) => Ok(None),
		}
	}

	async fn list_by_sender(
		&self,
		senders: &[String],
	) -> Result<Vec<TransactionRecord>, LifecycleError> {
		if senders.is_empty() {
			return Ok(Vec::new());
		}
		let records = self
			.load_all()
			.await?
			.into_iter()
			.filter(|record| matches_any(&record.sender, senders))
			.collect();
		Ok(newest_first(records))
	}

	async fn list_by_participant(
		&self,
		addresses: &[String],
	) -> Result<Vec<TransactionRecord>, LifecycleError> {
		if addresses.is_empty() {
			return Ok(Vec::new());
		}
		let records = self
			.load_all()
			.await?
			.into_iter()
			.filter(|record| {
				matches_any(&record.sender, addresses) || matches_any(&record.recipient, addresses)
			})
			.collect();
		Ok(newest_first(records))
	}

	async fn list_pending(&self) -> Result<Vec<TransactionRecord>, LifecycleError> {
		let mut records: Vec<_> = self
			.load_all()
			.await?
			.into_iter()
			.filter(|record| record.status == TransactionStatus::Pending)
			.collect();
		records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
		Ok(records)
	}
}
