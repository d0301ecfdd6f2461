//! Transfer tracker command line entry point.
//!
//! This binary classifies and verifies EVM transactions and tracks submitted
//! transactions until the chain reports their outcome.
//!
//! # Commands
//! - `verify`: Checks whether a transaction was sent by an address
//! - `track`: Records a transaction as pending and waits for its receipt
//! - `status`: Applies a terminal status to a tracked transaction
//! - `history`: Lists tracked transactions of a user or of addresses
//! - `resume`: Resolves every transaction still pending in the store
//!
//! Results are printed to stdout as JSON. Failures are printed to stderr and the
//! process exits with a code specific to the failure's outcome.

use clap::{Arg, ArgAction, ArgMatches, Command};
use dotenvy::dotenv;
use serde_json::{json, Value};
use std::{
	env::{set_var, var},
	error::Error,
	sync::Arc,
};
use tracing::{error, info, instrument};

use transfer_tracker::{
	bootstrap::{initialize_services, DefaultServices, Settings},
	models::{NewTransaction, Outcome, TerminalStatus},
	repositories::{AccountRepository, AccountService},
	services::{
		lifecycle::{
			derive_submission, FileTransactionStore, LifecycleError, LifecycleOrchestrator,
			TransactionStore,
		},
		verifier::VerificationError,
	},
	utils::{
		constants::{DEFAULT_METRICS_ADDRESS, DEFAULT_NETWORK_SLUG, DEFAULT_STORAGE_DIR},
		logging::setup_logging,
		metrics::server::create_metrics_server,
		parse_hash,
	},
};

/// A failed command, reported with its outcome
#[derive(Debug)]
struct Failure {
	outcome: Outcome,
	message: String,
}

impl From<VerificationError> for Failure {
	fn from(e: VerificationError) -> Self {
		Self {
			outcome: e.outcome(),
			message: e.to_string(),
		}
	}
}

impl From<LifecycleError> for Failure {
	fn from(e: LifecycleError) -> Self {
		Self {
			outcome: e.outcome(),
			message: e.to_string(),
		}
	}
}

impl From<Box<dyn Error>> for Failure {
	fn from(e: Box<dyn Error>) -> Self {
		Self {
			outcome: Outcome::ServerError,
			message: e.to_string(),
		}
	}
}

impl Failure {
	fn bad_request(message: impl Into<String>) -> Self {
		Self {
			outcome: Outcome::BadRequest,
			message: message.into(),
		}
	}
}

type CommandResult = Result<Value, Failure>;

fn cli() -> Command {
	Command::new("transfer-tracker")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Classifies EVM transactions, verifies their sender and tracks their status.")
		.subcommand_required(true)
		.arg(
			Arg::new("log-file")
				.long("log-file")
				.help("Write logs to file instead of stdout")
				.action(ArgAction::SetTrue)
				.global(true),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL")
				.global(true),
		)
		.arg(
			Arg::new("log-path")
				.long("log-path")
				.help("Path to store log files (default: logs/)")
				.value_name("PATH")
				.global(true),
		)
		.arg(
			Arg::new("metrics")
				.long("metrics")
				.help("Enable metrics server")
				.action(ArgAction::SetTrue)
				.global(true),
		)
		.arg(
			Arg::new("metrics-address")
				.long("metrics-address")
				.help("Address to start the metrics server on (default: 127.0.0.1:8081)")
				.value_name("HOST:PORT")
				.global(true),
		)
		.arg(
			Arg::new("network")
				.long("network")
				.help("Network slug from config/networks (default: NETWORK or bsc_testnet)")
				.value_name("NETWORK_SLUG")
				.global(true),
		)
		.subcommand(
			Command::new("verify")
				.about("Check whether a transaction was sent by an address")
				.arg(Arg::new("hash").long("hash").required(true).value_name("TX_HASH"))
				.arg(
					Arg::new("address")
						.long("address")
						.required(true)
						.value_name("ADDRESS"),
				),
		)
		.subcommand(
			Command::new("track")
				.about("Record a transaction as pending and resolve it from its receipt")
				.arg(Arg::new("hash").long("hash").required(true).value_name("TX_HASH"))
				.arg(Arg::new("from").long("from").value_name("ADDRESS"))
				.arg(Arg::new("to").long("to").value_name("ADDRESS"))
				.arg(Arg::new("amount").long("amount").value_name("AMOUNT"))
				.arg(
					Arg::new("token-symbol")
						.long("token-symbol")
						.value_name("SYMBOL"),
				)
				.arg(
					Arg::new("no-wait")
						.long("no-wait")
						.help("Return once the pending record exists")
						.action(ArgAction::SetTrue),
				),
		)
		.subcommand(
			Command::new("status")
				.about("Apply a terminal status to a tracked transaction")
				.arg(Arg::new("hash").long("hash").required(true).value_name("TX_HASH"))
				.arg(
					Arg::new("status")
						.long("status")
						.required(true)
						.value_name("success|failed"),
				),
		)
		.subcommand(
			Command::new("history")
				.about("List tracked transactions, newest first")
				.arg(
					Arg::new("username")
						.long("username")
						.value_name("USERNAME")
						.conflicts_with("address"),
				)
				.arg(
					Arg::new("address")
						.long("address")
						.value_name("ADDRESS")
						.action(ArgAction::Append),
				)
				.arg(
					Arg::new("include-received")
						.long("include-received")
						.help("Also list transactions received by the addresses")
						.action(ArgAction::SetTrue),
				),
		)
		.subcommand(Command::new("resume").about("Resolve every transaction still pending"))
}

fn settings(matches: &ArgMatches) -> Settings {
	Settings {
		network_slug: matches
			.get_one::<String>("network")
			.cloned()
			.or_else(|| var("NETWORK").ok())
			.unwrap_or_else(|| DEFAULT_NETWORK_SLUG.to_string()),
		storage_dir: var("STORAGE_DIR").unwrap_or_else(|_| DEFAULT_STORAGE_DIR.to_string()),
		network_config_dir: var("NETWORK_CONFIG_DIR").ok(),
		account_config_dir: var("ACCOUNT_CONFIG_DIR").ok(),
	}
}

fn open_orchestrator(settings: &Settings) -> Result<LifecycleOrchestrator<FileTransactionStore>, Failure> {
	let store = FileTransactionStore::new(&settings.storage_dir)?;
	Ok(LifecycleOrchestrator::new(Arc::new(store)))
}

#[instrument(skip_all)]
async fn verify(services: &DefaultServices, args: &ArgMatches) -> CommandResult {
	let hash = args.get_one::<String>("hash").map(String::as_str).unwrap_or_default();
	let address = args
		.get_one::<String>("address")
		.map(String::as_str)
		.unwrap_or_default();

	let verdict = services.verifier.verify(hash, address).await?;
	serde_json::to_value(verdict).map_err(|e| Failure::from(LifecycleError::from(e)))
}

/// Fills fields missing from the command line from the chain's view of the hash
async fn submission_for(services: &DefaultServices, args: &ArgMatches) -> Result<NewTransaction, Failure> {
	let hash = args.get_one::<String>("hash").cloned().unwrap_or_default();
	let given = |name: &str| args.get_one::<String>(name).cloned();

	let mut submission = match (
		given("from"),
		given("to"),
		given("amount"),
		given("token-symbol"),
	) {
		(Some(sender), Some(recipient), Some(amount), Some(token_symbol)) => NewTransaction {
			hash,
			sender,
			recipient,
			amount,
			token_symbol,
		},
		_ => derive_submission(services.client.as_ref(), &services.classifier, &hash).await?,
	};

	if let Some(sender) = given("from") {
		submission.sender = sender;
	}
	if let Some(recipient) = given("to") {
		submission.recipient = recipient;
	}
	if let Some(amount) = given("amount") {
		submission.amount = amount;
	}
	if let Some(token_symbol) = given("token-symbol") {
		submission.token_symbol = token_symbol;
	}
	Ok(submission)
}

#[instrument(skip_all)]
async fn track(services: &DefaultServices, args: &ArgMatches) -> CommandResult {
	let submission = submission_for(services, args).await?;
	let transaction_hash = parse_hash(&submission.hash).map_err(Failure::bad_request)?;

	let handle = services
		.orchestrator
		.track(submission, services.watcher.watch(transaction_hash))
		.await?;

	let record = if args.get_flag("no-wait") {
		services
			.orchestrator
			.store()
			.get(handle.hash())
			.await?
			.ok_or_else(|| LifecycleError::not_found(handle.hash()))?
	} else {
		info!(hash = handle.hash(), "Waiting for receipt");
		handle.resolved().await?
	};

	serde_json::to_value(record).map_err(|e| Failure::from(LifecycleError::from(e)))
}

async fn status(settings: &Settings, args: &ArgMatches) -> CommandResult {
	let hash = args.get_one::<String>("hash").map(String::as_str).unwrap_or_default();
	let status = args
		.get_one::<String>("status")
		.map(String::as_str)
		.unwrap_or_default()
		.parse::<TerminalStatus>()
		.map_err(Failure::bad_request)?;

	let record = open_orchestrator(settings)?
		.update_status(hash, status)
		.await?;
	serde_json::to_value(record).map_err(|e| Failure::from(LifecycleError::from(e)))
}

async fn history(settings: &Settings, args: &ArgMatches) -> CommandResult {
	let addresses: Vec<String> = match args.get_one::<String>("username") {
		Some(username) => {
			let accounts = AccountService::<AccountRepository>::new(
				settings
					.account_config_dir
					.as_deref()
					.map(std::path::Path::new),
			)
			.map_err(|e| Failure::from(Box::new(e) as Box<dyn Error>))?;
			accounts.addresses_for(username)
		}
		None => args
			.get_many::<String>("address")
			.map(|values| values.cloned().collect())
			.unwrap_or_default(),
	};

	if addresses.is_empty() && args.get_one::<String>("username").is_none() {
		return Err(Failure::bad_request("Either --username or --address is required"));
	}

	let records = open_orchestrator(settings)?
		.history(&addresses, args.get_flag("include-received"))
		.await?;
	serde_json::to_value(records).map_err(|e| Failure::from(LifecycleError::from(e)))
}

#[instrument(skip_all)]
async fn resume(services: &DefaultServices) -> CommandResult {
	let handles = services.orchestrator.resume(&services.watcher).await?;

	let mut resolved = Vec::with_capacity(handles.len());
	for result in futures::future::join_all(handles.into_iter().map(|handle| handle.resolved())).await
	{
		match result {
			Ok(record) => resolved.push(record),
			Err(e) => error!("Failed to resolve pending transaction: {}", e),
		}
	}

	serde_json::to_value(resolved).map_err(|e| Failure::from(LifecycleError::from(e)))
}

async fn run(matches: &ArgMatches) -> CommandResult {
	let settings = settings(matches);

	match matches.subcommand() {
		Some(("status", args)) => status(&settings, args).await,
		Some(("history", args)) => history(&settings, args).await,
		Some((name, args)) => {
			let services = initialize_services(&settings).await?;
			match name {
				"verify" => verify(&services, args).await,
				"track" => track(&services, args).await,
				"resume" => resume(&services).await,
				other => Err(Failure::bad_request(format!("Unknown command: {}", other))),
			}
		}
		None => Err(Failure::bad_request("A command is required")),
	}
}

/// Main entry point for the transfer tracker.
///
/// # Errors
/// Returns an error if waiting for the shutdown signal fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let matches = cli().get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if matches.get_flag("log-file") && var("LOG_MODE").is_err() {
		set_var("LOG_MODE", "file");
	}

	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	if let Some(path) = matches.get_one::<String>("log-path") {
		if var("LOG_DATA_DIR").is_err() {
			set_var("LOG_DATA_DIR", path);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let metrics_enabled =
		matches.get_flag("metrics") || var("METRICS_ENABLED").map(|v| v == "true").unwrap_or(false);

	if metrics_enabled {
		let metrics_address = matches
			.get_one::<String>("metrics-address")
			.cloned()
			.or_else(|| var("METRICS_PORT").ok().map(|port| format!("127.0.0.1:{}", port)))
			.unwrap_or_else(|| DEFAULT_METRICS_ADDRESS.to_string());

		match create_metrics_server(metrics_address) {
			Ok(server) => {
				tokio::spawn(async move {
					if let Err(e) = server.await {
						error!("Metrics server error: {}", e);
					}
				});
			}
			Err(e) => error!("Failed to create metrics server: {}", e),
		}
	}

	let result = tokio::select! {
		result = run(&matches) => result,
		signal = tokio::signal::ctrl_c() => {
			signal?;
			info!("Shutdown signal received, pending records stay pending until resumed");
			return Ok(());
		}
	};

	match result {
		Ok(output) => {
			println!("{}", serde_json::to_string_pretty(&output)?);
			Ok(())
		}
		Err(failure) => {
			eprintln!(
				"{}",
				json!({
					"error": failure.message,
					"outcome": failure.outcome,
					"status": failure.outcome.status_code(),
				})
			);
			std::process::exit(failure.outcome.exit_code());
		}
	}
}
