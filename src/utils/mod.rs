//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - constants: Constants for the application
//! - evm: Address and transaction hash helpers
//! - logging: Logging utilities
//! - metrics: Metrics utilities
//! - tests: Builders for test fixtures
//! - units: Formatting of token amounts

mod evm;
mod units;

pub mod constants;
pub mod logging;
pub mod metrics;

pub use constants::*;
pub use evm::*;
pub use units::*;
