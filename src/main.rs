//! Ledger Bench CLI
//!
//! Command-line benchmark comparing single-thread and multi-thread
//! transfer throughput over a lock-protected account registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release
//! cargo run --release -- --workers 50 --quota 10000
//! cargo run --release -- --seed 42 --pause-micros 0
//! ```
//!
//! The program seeds the configured number of accounts, lists them, then
//! drives the transfer workload twice - once with a single worker and once
//! with the configured worker count - and prints elapsed wall-clock time
//! for each run.
//!
//! Diagnostics go to stderr via `tracing` (enable with `RUST_LOG=debug`);
//! the listing and the timing report go to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (report could not be written, worker thread panicked)

use ledger_bench::cli;
use ledger_bench::core::{AccountRegistry, SharedRng, WorkerStats, WorkloadDriver};
use ledger_bench::io::{write_account_listing, write_benchmark_report, BenchmarkReport};
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    init_tracing();

    let config = args.to_run_config();

    // Shared state for the whole process: registry, generator, driver
    let rng = Arc::new(match args.seed {
        Some(seed) => SharedRng::seeded(seed),
        None => SharedRng::from_entropy(),
    });
    let registry = Arc::new(AccountRegistry::new());
    registry.seed(config.accounts, &rng);

    let mut stdout = std::io::stdout();
    if let Err(e) = write_account_listing(&registry, &mut stdout) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let driver = WorkloadDriver::new(registry, rng, config.quota, config.pause);

    info!(quota = config.quota, "starting single-worker run");
    let single_elapsed = run_once(&driver, 1);

    info!(
        quota = config.quota,
        workers = config.workers,
        "starting multi-worker run"
    );
    let multi_elapsed = run_once(&driver, config.workers);

    let report = BenchmarkReport {
        transactions: config.quota,
        single_elapsed,
        multi_elapsed,
        workers: config.workers,
    };
    if let Err(e) = write_benchmark_report(&report, &mut stdout) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the workload once with the given worker count, returning elapsed time
///
/// The clock brackets quota completion: it stops as soon as the completion
/// flag is set, while stragglers that are mid-iteration finish and get
/// joined off the clock.
fn run_once(driver: &WorkloadDriver, workers: usize) -> Duration {
    driver.reset_counter();

    let started = Instant::now();
    let handles: Vec<_> = (0..workers).map(|_| driver.spawn_worker()).collect();
    driver.await_completion();
    let elapsed = started.elapsed();

    let mut totals = WorkerStats::default();
    for handle in handles {
        match handle.join() {
            Ok(stats) => {
                totals.succeeded += stats.succeeded;
                totals.failed += stats.failed;
                totals.skipped += stats.skipped;
            }
            Err(_) => {
                eprintln!("Error: worker thread panicked");
                process::exit(1);
            }
        }
    }
    info!(
        workers,
        succeeded = totals.succeeded,
        failed = totals.failed,
        skipped = totals.skipped,
        "run complete"
    );

    elapsed
}

/// Initialize tracing to stderr, keeping stdout clean for the report
///
/// Filter defaults to `warn`; override with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
