//! Core business logic module
//!
//! This module contains the components of the concurrent workload:
//! - `registry` - the account registry and the atomic transfer operation
//! - `rng` - the shared, mutex-guarded random generator
//! - `counter` - the transaction counter and completion signal
//! - `workload` - the worker loop and the driver coordinating a run

pub mod counter;
pub mod registry;
pub mod rng;
pub mod workload;

pub use counter::{CompletionSignal, TransactionCounter};
pub use registry::AccountRegistry;
pub use rng::{SharedRng, TransferRequest};
pub use workload::{RunConfig, WorkerStats, WorkloadDriver};
