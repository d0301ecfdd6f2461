//! Bootstrap module for initializing services.
//!
//! This module loads configuration, connects the chain gateway and wires the
//! classifier, verifier and lifecycle services around one shared client and one
//! shared store.
//!
//! # Services
//! - `TransactionClassifier`: Classifies transactions into transfers
//! - `ProvenanceVerifier`: Checks who sent a transaction
//! - `ReceiptWatcher`: Produces confirmation signals from receipts
//! - `LifecycleOrchestrator`: Records and resolves tracked transactions

use std::{error::Error, path::Path, sync::Arc};
use tracing::info;

use crate::{
	models::Network,
	repositories::{NetworkRepository, NetworkService},
	services::{
		blockchain::{EvmClient, EvmClientTrait, HttpTransportClient},
		classifier::TransactionClassifier,
		lifecycle::{FileTransactionStore, LifecycleOrchestrator, ReceiptWatcher, TransactionStore},
		verifier::ProvenanceVerifier,
	},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Locations and selections read from the environment
#[derive(Debug, Clone)]
pub struct Settings {
	pub network_slug: String,
	pub storage_dir: String,
	pub network_config_dir: Option<String>,
	pub account_config_dir: Option<String>,
}

/// Services sharing one gateway client and one store
pub struct Services<C: EvmClientTrait + ?Sized, S: TransactionStore + ?Sized> {
	pub network: Network,
	pub client: Arc<C>,
	pub classifier: TransactionClassifier<C>,
	pub verifier: ProvenanceVerifier<C>,
	pub watcher: ReceiptWatcher<C>,
	pub orchestrator: LifecycleOrchestrator<S>,
}

/// Services as run by the binary
pub type DefaultServices = Services<EvmClient<HttpTransportClient>, FileTransactionStore>;

/// Wires the services around an existing client and store
pub fn build_services<C, S>(network: Network, client: Arc<C>, store: Arc<S>) -> Services<C, S>
where
	C: EvmClientTrait + ?Sized + 'static,
	S: TransactionStore + ?Sized + 'static,
{
	Services {
		classifier: TransactionClassifier::new(client.clone(), &network),
		verifier: ProvenanceVerifier::new(client.clone(), &network),
		watcher: ReceiptWatcher::for_network(client.clone(), &network),
		orchestrator: LifecycleOrchestrator::new(store),
		client,
		network,
	}
}

/// Loads configuration, connects to the network and opens the record store
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the network is unknown,
/// none of its RPC URLs answer or the storage directory cannot be created.
pub async fn initialize_services(settings: &Settings) -> Result<DefaultServices> {
	let network_service = NetworkService::<NetworkRepository>::new(
		settings.network_config_dir.as_deref().map(Path::new),
	)?;

	let network = network_service.require(&settings.network_slug)?;
	let client = Arc::new(EvmClient::new(&network).await?);
	let store = Arc::new(FileTransactionStore::new(&settings.storage_dir)?);

	info!(
		network = %network.slug,
		storage = %settings.storage_dir,
		"Services initialized"
	);

	Ok(build_services(network, client, store))
}
