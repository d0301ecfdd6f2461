//! Logging utilities for the application
//!
//! Logging goes through `tracing`. The level comes from `LOG_LEVEL` (falling back to
//! `RUST_LOG`, then `info`). With `LOG_MODE=file` output goes to a daily rolling file
//! under `LOG_DATA_DIR` instead of stdout. Records emitted through the `log` facade
//! are forwarded to the same subscriber.

use std::env;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// File name prefix used by the rolling file appender
const LOG_FILE_PREFIX: &str = "transfer-tracker.log";

/// Default directory for log files
const DEFAULT_LOG_DIR: &str = "logs/";

type LoggingResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Setup logging for the application from environment variables
pub fn setup_logging() -> LoggingResult {
	let filter = build_filter(env::var("LOG_LEVEL").ok(), env::var("RUST_LOG").ok());

	if env::var("LOG_MODE").map(|m| m == "file").unwrap_or(false) {
		let dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
		let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
		return setup_logging_with_writer(appender, filter, false);
	}

	setup_logging_with_writer(std::io::stdout, filter, true)
}

/// Builds the level filter
///
/// `LOG_LEVEL` wins over `RUST_LOG` so that the CLI flag can override a
/// globally exported `RUST_LOG`.
pub fn build_filter(log_level: Option<String>, rust_log: Option<String>) -> EnvFilter {
	log_level
		.or(rust_log)
		.and_then(|directive| EnvFilter::try_new(directive).ok())
		.unwrap_or_else(|| EnvFilter::new("info"))
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(writer: W, filter: EnvFilter, ansi: bool) -> LoggingResult
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(ansi)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
