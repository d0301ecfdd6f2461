//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines specific metrics for classification, verification and tracking.

pub mod server;
use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, Gauge, Opts, Registry, TextEncoder};

lazy_static! {
	// Global Prometheus registry.
	pub static ref REGISTRY: Registry = Registry::new();

	// Counter Vector for classified transactions, by transfer kind
	pub static ref TRANSFERS_CLASSIFIED: CounterVec = {
		let counter = CounterVec::new(
			Opts::new("transfers_classified_total", "Number of classified transactions per kind"),
			&["kind"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Counter Vector for provenance checks, by verdict or error outcome
	pub static ref VERIFICATIONS: CounterVec = {
		let counter = CounterVec::new(
			Opts::new("verifications_total", "Number of provenance verifications per outcome"),
			&["outcome"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Counter Vector for applied status transitions, by terminal status
	pub static ref STATUS_TRANSITIONS: CounterVec = {
		let counter = CounterVec::new(
			Opts::new("status_transitions_total", "Number of applied lifecycle transitions per status"),
			&["status"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Gauge for transactions waiting on a confirmation signal
	pub static ref TRACKING_IN_FLIGHT: Gauge = {
		let gauge = Gauge::new("tracking_in_flight", "Number of transactions awaiting confirmation").unwrap();
		REGISTRY.register(Box::new(gauge.clone())).unwrap();
		gauge
	};
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
	let encoder = TextEncoder::new();
	let metric_families = REGISTRY.gather();
	let mut buffer = Vec::new();
	encoder.encode(&metric_families, &mut buffer)?;
	Ok(buffer)
}
