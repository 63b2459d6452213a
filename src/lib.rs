//! Ledger Bench Library
//! # Overview
//!
//! This library provides a minimal in-memory ledger of named accounts and a
//! concurrent transfer workload used to benchmark single-thread vs.
//! multi-thread throughput of a lock-protected critical section.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, LedgerError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - The account registry and the atomic transfer
//!     operation, all guarded by one lock
//!   - [`core::rng`] - The shared random generator behind its own lock
//!   - [`core::counter`] - The transaction counter and completion signal
//!   - [`core::workload`] - The worker loop and run coordination
//! - [`io`] - Console report formatting
//!
//! # Locking Discipline
//!
//! Three independent mutexes guard three disjoint pieces of shared state:
//! the account registry (lookups, enumeration, and the whole transfer
//! check-and-mutate sequence), the random generator, and the transaction
//! counter. No worker ever holds one lock while acquiring another, so
//! deadlock is structurally impossible.
//!
//! # Workload
//!
//! Each worker repeatedly draws two random account identifiers and a
//! random amount, resolves the identifiers, attempts the transfer, and
//! records the attempt against a global quota. Successful, rejected, and
//! skipped attempts all count identically; the run completes when the
//! quota is reached.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{
    AccountRegistry, CompletionSignal, RunConfig, SharedRng, TransactionCounter, TransferRequest,
    WorkerStats, WorkloadDriver,
};
pub use io::{write_account_listing, write_benchmark_report, BenchmarkReport};
pub use types::{Account, LedgerError};
