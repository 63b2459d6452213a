//! Console report formatting
//!
//! This module centralizes the benchmark's output format concerns:
//! the startup account listing and the final timing report. All functions
//! write to a caller-provided writer (no direct I/O) for easy testing.

use crate::core::registry::AccountRegistry;
use std::io::{self, Write};
use std::time::Duration;

/// Timing results of a complete benchmark invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// Transfer attempts recorded per run
    pub transactions: u64,
    /// Elapsed wall-clock time for the single-worker run
    pub single_elapsed: Duration,
    /// Elapsed wall-clock time for the multi-worker run
    pub multi_elapsed: Duration,
    /// Worker count used in the multi-worker run
    pub workers: usize,
}

/// Write the seeded accounts, one per line, in insertion order
///
/// Line format: `<identifier> has a balance of <balance>`
pub fn write_account_listing(
    registry: &AccountRegistry,
    output: &mut dyn Write,
) -> io::Result<()> {
    let mut result = Ok(());
    registry.for_each(|account| {
        if result.is_ok() {
            result = writeln!(
                output,
                "{} has a balance of {}",
                account.identifier, account.balance
            );
        }
    });
    result
}

/// Write the final timing report
///
/// Seconds are printed with six decimal places:
///
/// ```text
/// Performed 1000 transactions
/// ------------------------------------------------
/// 0.012345 seconds with 1 thread
/// 0.054321 seconds with 100 threads
/// ```
pub fn write_benchmark_report(report: &BenchmarkReport, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "Performed {} transactions", report.transactions)?;
    writeln!(output, "{}", "-".repeat(48))?;
    writeln!(
        output,
        "{:.6} seconds with 1 thread",
        report.single_elapsed.as_secs_f64()
    )?;
    writeln!(
        output,
        "{:.6} seconds with {} threads",
        report.multi_elapsed.as_secs_f64(),
        report.workers
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;

    #[test]
    fn test_account_listing_format_and_order() {
        let registry = AccountRegistry::new();
        registry.add(Account::new("bank account 1", 12_000));
        registry.add(Account::new("bank account 2", 25_500));

        let mut output = Vec::new();
        write_account_listing(&registry, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "bank account 1 has a balance of 12000\n\
             bank account 2 has a balance of 25500\n"
        );
    }

    #[test]
    fn test_empty_registry_produces_no_listing() {
        let registry = AccountRegistry::new();

        let mut output = Vec::new();
        write_account_listing(&registry, &mut output).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_benchmark_report_format() {
        let report = BenchmarkReport {
            transactions: 1_000,
            single_elapsed: Duration::from_micros(12_345),
            multi_elapsed: Duration::from_micros(654_321),
            workers: 100,
        };

        let mut output = Vec::new();
        write_benchmark_report(&report, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Performed 1000 transactions\n\
             ------------------------------------------------\n\
             0.012345 seconds with 1 thread\n\
             0.654321 seconds with 100 threads\n"
        );
    }

    #[test]
    fn test_report_seconds_use_six_decimal_places() {
        let report = BenchmarkReport {
            transactions: 10,
            single_elapsed: Duration::from_secs(2),
            multi_elapsed: Duration::from_micros(2),
            workers: 4,
        };

        let mut output = Vec::new();
        write_benchmark_report(&report, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("2.000000 seconds with 1 thread"));
        assert!(text.contains("0.000002 seconds with 4 threads"));
    }
}
