//! I/O module
//!
//! Console output formatting for the benchmark. All writers take
//! `&mut dyn Write` so tests can capture output without touching stdout.

pub mod report;

pub use report::{write_account_listing, write_benchmark_report, BenchmarkReport};
