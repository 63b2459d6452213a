//! Error types for the ledger benchmark
//!
//! The taxonomy is deliberately small: every variant is a non-fatal
//! outcome of a transfer attempt. The workload driver counts failed and
//! skipped attempts toward the quota exactly like successes, so none of
//! these errors ever aborts a run.

use thiserror::Error;

/// Errors produced by registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No account in the registry matches the requested identifier
    ///
    /// A transfer referencing a missing account is treated as a skipped
    /// no-op by the workload, never as a crash.
    #[error("account not found: {identifier}")]
    AccountNotFound {
        /// The identifier that failed to resolve
        identifier: String,
    },

    /// The source account cannot cover the requested amount
    ///
    /// Expected and frequent under random workloads; counted identically
    /// to a success for quota purposes.
    #[error("insufficient funds in {identifier}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Source account identifier
        identifier: String,
        /// Balance at the time of the check
        balance: i64,
        /// Amount the transfer asked for
        requested: i64,
    },

    /// Transfer amounts must be non-negative
    #[error("transfer amount must be non-negative, got {amount}")]
    NegativeAmount {
        /// The offending amount
        amount: i64,
    },
}

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(identifier: &str) -> Self {
        LedgerError::AccountNotFound {
            identifier: identifier.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(identifier: &str, balance: i64, requested: i64) -> Self {
        LedgerError::InsufficientFunds {
            identifier: identifier.to_string(),
            balance,
            requested,
        }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(amount: i64) -> Self {
        LedgerError::NegativeAmount { amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::account_not_found(
        LedgerError::account_not_found("bank account 9"),
        "account not found: bank account 9"
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds("bank account 1", 250, 400),
        "insufficient funds in bank account 1: balance 250, requested 400"
    )]
    #[case::negative_amount(
        LedgerError::negative_amount(-5),
        "transfer amount must be non-negative, got -5"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::account_not_found(
        LedgerError::account_not_found("bank account 2"),
        LedgerError::AccountNotFound { identifier: "bank account 2".to_string() }
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds("bank account 1", 100, 200),
        LedgerError::InsufficientFunds {
            identifier: "bank account 1".to_string(),
            balance: 100,
            requested: 200,
        }
    )]
    fn test_helper_constructors(#[case] built: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(built, expected);
    }
}
