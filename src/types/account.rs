//! Account-related types for the ledger benchmark
//!
//! This module defines the Account structure shared by the registry,
//! the transfer operation, and the workload driver.

/// A named balance record participating in transfers
///
/// Accounts are created once during seeding and live for the whole run.
/// The identifier never changes after creation; the balance is mutated in
/// place by transfers, but only while the registry lock is held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique text key for this account (e.g. "bank account 1")
    pub identifier: String,

    /// Current balance in whole currency units
    ///
    /// Seeded non-negative; the insufficient-funds guard in the transfer
    /// operation keeps it non-negative for the rest of the run.
    pub balance: i64,
}

impl Account {
    /// Create a new account with the given identifier and starting balance
    pub fn new(identifier: impl Into<String>, balance: i64) -> Self {
        Account {
            identifier: identifier.into(),
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_identifier_and_balance() {
        let account = Account::new("bank account 1", 12_500);
        assert_eq!(account.identifier, "bank account 1");
        assert_eq!(account.balance, 12_500);
    }

    #[test]
    fn test_accounts_with_same_fields_are_equal() {
        let a = Account::new("bank account 2", 100);
        let b = Account::new("bank account 2", 100);
        assert_eq!(a, b);
    }
}
