use crate::core::workload::{
    RunConfig, DEFAULT_QUOTA, DEFAULT_SEED_ACCOUNTS, DEFAULT_WORKERS,
};
use clap::Parser;
use std::time::Duration;

/// Benchmark a lock-protected account registry under concurrent transfers
#[derive(Parser, Debug)]
#[command(name = "ledger-bench")]
#[command(
    about = "Benchmark single-thread vs multi-thread transfer throughput",
    long_about = None
)]
pub struct CliArgs {
    /// Number of accounts to seed before the runs
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = DEFAULT_SEED_ACCOUNTS,
        help = "Number of accounts to seed (default: 3)"
    )]
    pub accounts: usize,

    /// Worker count for the multi-threaded run
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = DEFAULT_WORKERS,
        help = "Concurrent workers for the second run (default: 100)"
    )]
    pub workers: usize,

    /// Transaction quota per run
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = DEFAULT_QUOTA,
        help = "Transfer attempts each run records before completing (default: 1000)"
    )]
    pub quota: u64,

    /// Per-iteration worker pause in microseconds
    #[arg(
        long = "pause-micros",
        value_name = "MICROS",
        default_value_t = 50,
        help = "Sleep at the top of each worker iteration; 0 disables it"
    )]
    pub pause_micros: u64,

    /// Fixed seed for the shared random generator
    #[arg(
        long,
        value_name = "SEED",
        help = "Seed the random generator for reproducible runs"
    )]
    pub seed: Option<u64>,
}

impl CliArgs {
    /// Build a RunConfig from the parsed arguments
    ///
    /// Zero account or worker counts fall back to the defaults via
    /// [`RunConfig::new`]; a zero quota or pause passes through unchanged.
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig::new(
            self.accounts,
            self.workers,
            self.quota,
            Duration::from_micros(self.pause_micros),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::all_defaults(&["program"], 3, 100, 1_000)]
    #[case::custom_accounts(&["program", "--accounts", "5"], 5, 100, 1_000)]
    #[case::custom_workers(&["program", "--workers", "8"], 3, 8, 1_000)]
    #[case::custom_quota(&["program", "--quota", "250"], 3, 100, 250)]
    #[case::all_custom(
        &["program", "--accounts", "4", "--workers", "16", "--quota", "5000"],
        4,
        16,
        5_000
    )]
    fn test_argument_parsing(
        #[case] args: &[&str],
        #[case] accounts: usize,
        #[case] workers: usize,
        #[case] quota: u64,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.accounts, accounts);
        assert_eq!(parsed.workers, workers);
        assert_eq!(parsed.quota, quota);
    }

    #[rstest]
    #[case::zero_accounts(&["program", "--accounts", "0"], 3, 100)]
    #[case::zero_workers(&["program", "--workers", "0"], 3, 100)]
    fn test_zero_counts_fall_back_to_defaults(
        #[case] args: &[&str],
        #[case] accounts: usize,
        #[case] workers: usize,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_run_config();
        assert_eq!(config.accounts, accounts);
        assert_eq!(config.workers, workers);
    }

    #[test]
    fn test_pause_micros_converts_to_duration() {
        let parsed = CliArgs::try_parse_from(["program", "--pause-micros", "250"]).unwrap();
        let config = parsed.to_run_config();
        assert_eq!(config.pause, Duration::from_micros(250));
    }

    #[test]
    fn test_seed_defaults_to_none() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.seed, None);

        let parsed = CliArgs::try_parse_from(["program", "--seed", "42"]).unwrap();
        assert_eq!(parsed.seed, Some(42));
    }

    #[rstest]
    #[case::negative_quota(&["program", "--quota", "-1"])]
    #[case::malformed_workers(&["program", "--workers", "many"])]
    #[case::unknown_flag(&["program", "--threads", "4"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
