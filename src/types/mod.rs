//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `account`: the Account record
//! - `error`: error types for registry operations

pub mod account;
pub mod error;

pub use account::Account;
pub use error::LedgerError;
