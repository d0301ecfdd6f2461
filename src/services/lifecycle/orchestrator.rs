//! Lifecycle orchestration of submitted transactions.
//!
//! Tracking is a two-phase commit over the store: the pending record is inserted
//! while the caller waits, then a spawned task awaits the confirmation signal and
//! applies the terminal status. A transition is never attempted before its insert
//! has completed.

use std::{future::Future, sync::Arc};
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::{
	models::{NewTransaction, TerminalStatus, TransactionRecord},
	services::{
		blockchain::EvmClientTrait,
		classifier::TransactionClassifier,
		lifecycle::{
			confirmation::{ConfirmationError, ReceiptWatcher},
			error::LifecycleError,
			store::TransactionStore,
		},
	},
	utils::{
		metrics::{STATUS_TRANSITIONS, TRACKING_IN_FLIGHT},
		parse_hash,
	},
};

/// Handle to the background resolution of one tracked transaction
#[derive(Debug)]
pub struct TrackingHandle {
	hash: String,
	task: JoinHandle<Result<TransactionRecord, LifecycleError>>,
}

impl TrackingHandle {
	/// Normalized hash of the tracked record
	pub fn hash(&self) -> &str {
		&self.hash
	}

	/// Waits for the record to reach a terminal status
	///
	/// Dropping the handle instead leaves the resolution running.
	pub async fn resolved(self) -> Result<TransactionRecord, LifecycleError> {
		self.task.await.map_err(|e| {
			LifecycleError::internal_error(format!("Tracking task for {} failed: {}", self.hash, e))
		})?
	}
}

/// Coordinates pending records with their confirmation signals
pub struct LifecycleOrchestrator<S: TransactionStore + ?Sized> {
	store: Arc<S>,
}

impl<S: TransactionStore + ?Sized> Clone for LifecycleOrchestrator<S> {
	fn clone(&self) -> Self {
		Self {
			store: self.store.clone(),
		}
	}
}

impl<S: TransactionStore + ?Sized + 'static> LifecycleOrchestrator<S> {
	pub fn new(store: Arc<S>) -> Self {
		Self { store }
	}

	pub fn store(&self) -> &Arc<S> {
		&self.store
	}

	/// Records `submission` as pending and resolves it once `confirmation` settles
	///
	/// Returns as soon as the pending record exists. A hash that is already
	/// recorded is treated as tracked and its record is still resolved by
	/// `confirmation`; the store keeps whichever terminal status lands first.
	#[instrument(skip_all, fields(hash = %submission.hash))]
	pub async fn track<F>(
		&self,
		submission: NewTransaction,
		confirmation: F,
	) -> Result<TrackingHandle, LifecycleError>
	where
		F: Future<Output = Result<(), ConfirmationError>> + Send + 'static,
	{
		let hash = match self.store.insert(submission).await {
			Ok(record) => {
				info!(hash = %record.hash, "Tracking new transaction");
				record.hash
			}
			Err(LifecycleError::DuplicateHash(hash)) => {
				info!(%hash, "Transaction already tracked");
				hash
			}
			Err(e) => return Err(e),
		};

		Ok(self.spawn_resolution(hash, confirmation))
	}

	/// Fetches and classifies `hash`, then tracks it with the derived fields
	pub async fn track_by_hash<C>(
		&self,
		client: &C,
		classifier: &TransactionClassifier<C>,
		watcher: &ReceiptWatcher<C>,
		hash: &str,
	) -> Result<TrackingHandle, LifecycleError>
	where
		C: EvmClientTrait + ?Sized + 'static,
	{
		let submission = derive_submission(client, classifier, hash).await?;
		let transaction_hash = parse_hash(&submission.hash).map_err(LifecycleError::invalid_input)?;
		self.track(submission, watcher.watch(transaction_hash)).await
	}

	/// Applies a terminal status reported by the caller
	#[instrument(skip(self))]
	pub async fn update_status(
		&self,
		hash: &str,
		status: TerminalStatus,
	) -> Result<TransactionRecord, LifecycleError> {
		let record = self.store.transition(hash, status).await?;
		STATUS_TRANSITIONS
			.with_label_values(&[record.status.as_str()])
			.inc();
		Ok(record)
	}

	/// Records involving `addresses`, newest first
	///
	/// Only sent transactions are listed unless `include_received` is set.
	pub async fn history(
		&self,
		addresses: &[String],
		include_received: bool,
	) -> Result<Vec<TransactionRecord>, LifecycleError> {
		if include_received {
			self.store.list_by_participant(addresses).await
		} else {
			self.store.list_by_sender(addresses).await
		}
	}

	/// Re-attaches every pending record to a receipt watcher
	///
	/// Records whose stored hash no longer parses are skipped with a warning.
	#[instrument(skip_all)]
	pub async fn resume<C>(
		&self,
		watcher: &ReceiptWatcher<C>,
	) -> Result<Vec<TrackingHandle>, LifecycleError>
	where
		C: EvmClientTrait + ?Sized + 'static,
	{
		let pending = self.store.list_pending().await?;
		info!(count = pending.len(), "Resuming pending transactions");

		let mut handles = Vec::with_capacity(pending.len());
		for record in pending {
			match parse_hash(&record.hash) {
				Ok(transaction_hash) => {
					handles.push(self.spawn_resolution(record.hash, watcher.watch(transaction_hash)));
				}
				Err(e) => warn!(hash = %record.hash, "Skipping pending record: {}", e),
			}
		}
		Ok(handles)
	}

	fn spawn_resolution<F>(&self, hash: String, confirmation: F) -> TrackingHandle
	where
		F: Future<Output = Result<(), ConfirmationError>> + Send + 'static,
	{
		let store = self.store.clone();
		let key = hash.clone();
		TRACKING_IN_FLIGHT.inc();

		let task = tokio::spawn(async move {
			let result = resolve(store.as_ref(), &key, confirmation).await;
			TRACKING_IN_FLIGHT.dec();
			result
		});

		TrackingHandle { hash, task }
	}
}

async fn resolve<S, F>(
	store: &S,
	hash: &str,
	confirmation: F,
) -> Result<TransactionRecord, LifecycleError>
where
	S: TransactionStore + ?Sized,
	F: Future<Output = Result<(), ConfirmationError>>,
{
	let status = match confirmation.await {
		Ok(()) => TerminalStatus::Success,
		Err(e) => {
			info!(%hash, "Transaction did not confirm: {}", e);
			TerminalStatus::Failed
		}
	};

	match store.transition(hash, status).await {
		Ok(record) => {
			STATUS_TRANSITIONS
				.with_label_values(&[record.status.as_str()])
				.inc();
			info!(%hash, status = %record.status, "Transaction resolved");
			Ok(record)
		}
		Err(LifecycleError::InvalidTransition(_)) => store
			.get(hash)
			.await?
			.ok_or_else(|| LifecycleError::not_found(hash)),
		Err(e) => Err(e),
	}
}

/// Builds a pending-record submission from the chain's view of `hash`
pub async fn derive_submission<C>(
	client: &C,
	classifier: &TransactionClassifier<C>,
	hash: &str,
) -> Result<NewTransaction, LifecycleError>
where
	C: EvmClientTrait + ?Sized,
{
	let transaction_hash = parse_hash(hash).map_err(LifecycleError::invalid_input)?;
	let transaction = client
		.get_transaction(transaction_hash)
		.await
		.map_err(|e| LifecycleError::gateway_error(e.to_string()))?
		.ok_or_else(|| LifecycleError::not_found(format!("{:#x}", transaction_hash)))?;

	let transfer = classifier.classify(&transaction).await;
	Ok(NewTransaction::from_classified(
		format!("{:#x}", transaction_hash),
		&transfer,
	))
}
