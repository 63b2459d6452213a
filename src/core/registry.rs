//! Account registry
//!
//! This module provides the `AccountRegistry` struct which owns the set of
//! accounts and the single mutex guarding them. Every lookup, enumeration,
//! and the whole transfer check-and-mutate sequence runs under that one
//! lock, which is exactly the critical section the benchmark measures.
//!
//! The registry is responsible for:
//! - Seeding the fixed set of benchmark accounts at startup
//! - Identifier lookup (linear scan, exact equality)
//! - In-order enumeration for reporting
//! - The atomic transfer operation between two accounts

use crate::core::rng::SharedRng;
use crate::types::{Account, LedgerError};
use std::sync::{Mutex, MutexGuard};

/// Build the identifier for the account at the given 1-indexed seed slot
pub fn account_identifier(index: usize) -> String {
    format!("bank account {}", index)
}

/// The shared collection of all accounts plus the lock guarding it
///
/// The registry is process-wide shared state: it is wrapped in an `Arc`
/// and handed to every worker. Balances may be mutated by any worker, but
/// only while holding the registry's internal lock. After seeding, the
/// collection is never resized; insertion order is preserved.
pub struct AccountRegistry {
    accounts: Mutex<Vec<Account>>,
}

impl AccountRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        AccountRegistry {
            accounts: Mutex::new(Vec::new()),
        }
    }

    // A poisoned lock means another worker panicked inside the critical
    // section; the run is unrecoverable at that point.
    fn lock(&self) -> MutexGuard<'_, Vec<Account>> {
        self.accounts.lock().expect("account registry lock poisoned")
    }

    /// Append one account under the registry lock
    ///
    /// Callers are responsible for keeping identifiers unique; the
    /// benchmark only ever appends through [`AccountRegistry::seed`],
    /// which generates distinct identifiers by construction.
    pub fn add(&self, account: Account) {
        self.lock().push(account);
    }

    /// Seed `count` accounts with generated identifiers and random balances
    ///
    /// Identifiers are `"bank account <i>"`, 1-indexed; balances are drawn
    /// uniformly from the seed range (10,000 to 30,000 inclusive). Each
    /// append acquires the lock independently, so concurrent seeding would
    /// be safe, but the design assumes seeding happens once on the main
    /// thread before any worker starts.
    pub fn seed(&self, count: usize, rng: &SharedRng) {
        for index in 1..=count {
            self.add(Account::new(account_identifier(index), rng.seed_balance()));
        }
    }

    /// Look up an account by identifier
    ///
    /// Acquires the lock, scans linearly for an exact identifier match,
    /// and returns a snapshot of the matching account. O(k) in registry
    /// size; the workload calls this twice per transfer.
    pub fn find(&self, identifier: &str) -> Option<Account> {
        self.lock()
            .iter()
            .find(|account| account.identifier == identifier)
            .cloned()
    }

    /// Visit every account in insertion order under the lock
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&Account),
    {
        for account in self.lock().iter() {
            visitor(account);
        }
    }

    /// Number of seeded accounts
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the registry holds no accounts
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Sum of all balances, taken under the lock
    ///
    /// Successful transfers conserve this sum; tests use it to verify the
    /// invariant after concurrent runs.
    pub fn total_balance(&self) -> i64 {
        self.lock().iter().map(|account| account.balance).sum()
    }

    /// Atomically move `amount` from one account to another
    ///
    /// The balance check and both mutations happen under a single
    /// acquisition of the registry lock, so no concurrent transfer can
    /// observe or interleave with a half-applied move.
    ///
    /// A self-transfer (`from == to`) is permitted: it succeeds whenever
    /// the balance covers the amount and changes nothing.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::NegativeAmount`] - `amount` is negative
    /// * [`LedgerError::AccountNotFound`] - either identifier is missing
    /// * [`LedgerError::InsufficientFunds`] - the source balance is below
    ///   `amount`; no balance is touched
    pub fn transfer(&self, from: &str, to: &str, amount: i64) -> Result<(), LedgerError> {
        if amount < 0 {
            return Err(LedgerError::negative_amount(amount));
        }

        let mut accounts = self.lock();

        let from_index = accounts
            .iter()
            .position(|account| account.identifier == from)
            .ok_or_else(|| LedgerError::account_not_found(from))?;
        let to_index = accounts
            .iter()
            .position(|account| account.identifier == to)
            .ok_or_else(|| LedgerError::account_not_found(to))?;

        let balance = accounts[from_index].balance;
        if balance < amount {
            return Err(LedgerError::insufficient_funds(from, balance, amount));
        }

        if from_index != to_index {
            accounts[from_index].balance -= amount;
            accounts[to_index].balance += amount;
        }

        Ok(())
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
