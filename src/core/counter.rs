//! Shared transaction counter and completion signal
//!
//! Two pieces of process-wide shared state, each behind its own lock,
//! independent of the registry lock:
//!
//! - `TransactionCounter` counts completed transfer attempts (successful,
//!   failed, or skipped alike) against a fixed quota. The increment and
//!   the quota comparison happen inside one critical section, so the
//!   decision "did my attempt reach the quota?" is race-free even when
//!   many workers record simultaneously.
//! - `CompletionSignal` is the flag the harness waits on. The wait blocks
//!   on a condition variable: the waiter resumes only after the flag is
//!   set, never spuriously early.

use std::sync::{Condvar, Mutex};

/// Quota-bounded count of completed transfer attempts
pub struct TransactionCounter {
    quota: u64,
    count: Mutex<u64>,
}

impl TransactionCounter {
    /// Create a counter that fills up at `quota` recorded attempts
    pub fn new(quota: u64) -> Self {
        TransactionCounter {
            quota,
            count: Mutex::new(0),
        }
    }

    /// Record one completed transfer attempt
    ///
    /// Increments the count and compares it against the quota under the
    /// same lock acquisition. The count saturates at the quota, so late
    /// workers that race past the finish line do not push it further.
    ///
    /// Returns `true` once the quota has been reached.
    pub fn record(&self) -> bool {
        let mut count = self.count.lock().expect("transaction counter lock poisoned");
        if *count < self.quota {
            *count += 1;
        }
        *count >= self.quota
    }

    /// Attempts recorded so far
    pub fn count(&self) -> u64 {
        *self.count.lock().expect("transaction counter lock poisoned")
    }

    /// The quota this counter fills up at
    pub fn quota(&self) -> u64 {
        self.quota
    }

    /// Reset the count to zero for a fresh run
    pub fn reset(&self) {
        *self.count.lock().expect("transaction counter lock poisoned") = 0;
    }
}

/// Shared flag signaling that a run has reached its quota
pub struct CompletionSignal {
    flag: Mutex<bool>,
    condvar: Condvar,
}

impl CompletionSignal {
    /// Create an unset signal
    pub fn new() -> Self {
        CompletionSignal {
            flag: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Set the flag and wake all waiters
    ///
    /// Idempotent: every worker that observes the quota may call this,
    /// only the first call changes anything observable.
    pub fn set(&self) {
        let mut flag = self.flag.lock().expect("completion signal lock poisoned");
        *flag = true;
        drop(flag);
        self.condvar.notify_all();
    }

    /// Block until the flag is set
    pub fn wait(&self) {
        let mut flag = self.flag.lock().expect("completion signal lock poisoned");
        while !*flag {
            flag = self
                .condvar
                .wait(flag)
                .expect("completion signal lock poisoned");
        }
    }

    /// Whether the flag is currently set
    pub fn is_set(&self) -> bool {
        *self.flag.lock().expect("completion signal lock poisoned")
    }

    /// Clear the flag for a fresh run
    pub fn reset(&self) {
        *self.flag.lock().expect("completion signal lock poisoned") = false;
    }
}

impl Default for CompletionSignal {
    fn default() -> Self {
        Self::new()
    }
}
