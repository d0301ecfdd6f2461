//! Repositories over the JSON configuration directories.
//!
//! - `network`: networks the gateway can connect to, keyed by slug
//! - `account`: wallet addresses owned by each username

mod account;
mod error;
mod network;

pub use account::{AccountRepository, AccountRepositoryTrait, AccountService};
pub use error::RepositoryError;
pub use network::{NetworkRepository, NetworkRepositoryTrait, NetworkService};
