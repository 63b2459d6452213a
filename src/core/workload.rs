//! Workload driver
//!
//! This module provides the `WorkloadDriver` that coordinates the shared
//! registry, random generator, transaction counter, and completion signal,
//! and the worker loop each spawned thread runs: draw a random transfer,
//! resolve both endpoints, attempt the move, record the attempt, and stop
//! once the quota is reached.
//!
//! A worker never holds more than one lock at a time (generator, registry,
//! counter, and flag are acquired strictly one after another), so deadlock
//! is structurally impossible.

use crate::core::counter::{CompletionSignal, TransactionCounter};
use crate::core::registry::AccountRegistry;
use crate::core::rng::SharedRng;
use crate::types::LedgerError;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::debug;

/// Default number of seeded benchmark accounts
pub const DEFAULT_SEED_ACCOUNTS: usize = 3;

/// Default worker count for the multi-threaded run
pub const DEFAULT_WORKERS: usize = 100;

/// Default transaction quota per run
pub const DEFAULT_QUOTA: u64 = 1_000;

/// Default per-iteration pause
pub const DEFAULT_PAUSE: Duration = Duration::from_micros(50);

/// Parameters for one benchmark invocation
///
/// Zero account or worker counts make no sense for a run and fall back to
/// the defaults; a zero quota and a zero pause are both legal (a zero
/// quota completes on the first recorded attempt, a zero pause removes
/// the workload-shaping sleep entirely).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of accounts to seed before the runs
    pub accounts: usize,
    /// Worker count for the multi-threaded run
    pub workers: usize,
    /// Transfer attempts recorded per run
    pub quota: u64,
    /// Sleep at the top of each worker iteration
    pub pause: Duration,
}

impl RunConfig {
    /// Create a config, substituting defaults for zero counts
    pub fn new(accounts: usize, workers: usize, quota: u64, pause: Duration) -> Self {
        RunConfig {
            accounts: if accounts == 0 {
                DEFAULT_SEED_ACCOUNTS
            } else {
                accounts
            },
            workers: if workers == 0 { DEFAULT_WORKERS } else { workers },
            quota,
            pause,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            accounts: DEFAULT_SEED_ACCOUNTS,
            workers: DEFAULT_WORKERS,
            quota: DEFAULT_QUOTA,
            pause: DEFAULT_PAUSE,
        }
    }
}

/// Per-worker tallies, kept for diagnostics only
///
/// Every attempt lands in exactly one bucket; all three count toward the
/// quota identically.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    /// Transfers that moved funds (or funded self-transfers)
    pub succeeded: u64,
    /// Transfers rejected for insufficient funds
    pub failed: u64,
    /// Attempts whose endpoints did not resolve to seeded accounts
    pub skipped: u64,
}

impl WorkerStats {
    /// Total attempts this worker contributed to the quota
    pub fn attempts(&self) -> u64 {
        self.succeeded + self.failed + self.skipped
    }
}

/// Spawns and coordinates the concurrent transfer workload
///
/// Holds shared handles to the registry, generator, counter, and
/// completion signal. The harness drives it through a small boundary:
/// [`reset_counter`](WorkloadDriver::reset_counter),
/// [`spawn_worker`](WorkloadDriver::spawn_worker), and
/// [`await_completion`](WorkloadDriver::await_completion).
pub struct WorkloadDriver {
    registry: Arc<AccountRegistry>,
    rng: Arc<SharedRng>,
    counter: Arc<TransactionCounter>,
    completed: Arc<CompletionSignal>,
    pause: Duration,
}

impl WorkloadDriver {
    /// Create a driver over a seeded registry
    ///
    /// `quota` is the total number of transfer attempts a run records
    /// before completing. `pause` is a brief sleep at the top of every
    /// worker iteration; it shapes the workload only and may be zero.
    pub fn new(
        registry: Arc<AccountRegistry>,
        rng: Arc<SharedRng>,
        quota: u64,
        pause: Duration,
    ) -> Self {
        WorkloadDriver {
            registry,
            rng,
            counter: Arc::new(TransactionCounter::new(quota)),
            completed: Arc::new(CompletionSignal::new()),
            pause,
        }
    }

    /// Reset the counter and completion flag for a fresh run
    pub fn reset_counter(&self) {
        self.counter.reset();
        self.completed.reset();
    }

    /// Number of accounts the underlying registry was seeded with
    pub fn seeded_accounts_count(&self) -> usize {
        self.registry.len()
    }

    /// Attempts recorded in the current run
    pub fn transactions_recorded(&self) -> u64 {
        self.counter.count()
    }

    /// The per-run transaction quota
    pub fn quota(&self) -> u64 {
        self.counter.quota()
    }

    /// Spawn one worker thread running the transfer loop
    ///
    /// The returned handle yields the worker's diagnostic tallies once it
    /// observes the quota and stops.
    pub fn spawn_worker(&self) -> JoinHandle<WorkerStats> {
        let registry = Arc::clone(&self.registry);
        let rng = Arc::clone(&self.rng);
        let counter = Arc::clone(&self.counter);
        let completed = Arc::clone(&self.completed);
        let pause = self.pause;

        thread::spawn(move || run_worker(&registry, &rng, &counter, &completed, pause))
    }

    /// Block until the current run's quota has been reached
    pub fn await_completion(&self) {
        self.completed.wait();
    }
}

/// The loop each worker runs until the quota is reached
///
/// Deliberately iterative: the run length is bounded by the quota, not by
/// stack depth. Each iteration:
///
/// 1. sleeps the configured pause,
/// 2. draws a transfer request under the generator lock,
/// 3. resolves both endpoints via `find` (a request that does not resolve
///    is skipped but still counted),
/// 4. attempts the transfer,
/// 5. records the attempt and stops if that recording reached the quota,
///    setting the completion flag on the way out.
fn run_worker(
    registry: &AccountRegistry,
    rng: &SharedRng,
    counter: &TransactionCounter,
    completed: &CompletionSignal,
    pause: Duration,
) -> WorkerStats {
    let mut stats = WorkerStats::default();
    // The registry is never resized after seeding, so the index range is
    // stable for the whole run.
    let account_count = registry.len();

    loop {
        if !pause.is_zero() {
            thread::sleep(pause);
        }

        let request = rng.next_request(account_count);

        if registry.find(&request.from).is_none() || registry.find(&request.to).is_none() {
            stats.skipped += 1;
        } else {
            match registry.transfer(&request.from, &request.to, request.amount) {
                Ok(()) => stats.succeeded += 1,
                Err(LedgerError::InsufficientFunds { .. }) => stats.failed += 1,
                Err(err) => {
                    debug!(%err, "transfer attempt skipped");
                    stats.skipped += 1;
                }
            }
        }

        if counter.record() {
            completed.set();
            break;
        }
    }

    debug!(
        succeeded = stats.succeeded,
        failed = stats.failed,
        skipped = stats.skipped,
        "worker finished"
    );
    stats
}
