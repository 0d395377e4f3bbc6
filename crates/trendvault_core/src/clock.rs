//! Timestamp sources for store mutations.
//!
//! # Responsibility
//! - Provide epoch-millisecond timestamps to the store.
//! - Allow deterministic clocks in tests and fixtures.
//!
//! # Invariants
//! - `SteppingClock` returns strictly increasing values.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of Unix epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall clock backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        // A clock set before 1970 is reported as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Deterministic clock that advances by a fixed step on every read.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    next: Cell<i64>,
    step: i64,
}

impl SteppingClock {
    /// Starts at `start_ms` and advances by `step_ms` per call.
    pub fn new(start_ms: i64, step_ms: i64) -> Self {
        Self {
            next: Cell::new(start_ms),
            step: step_ms.max(1),
        }
    }

    /// Returns the value the next `now_ms` call will produce.
    pub fn peek(&self) -> i64 {
        self.next.get()
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new(1_700_000_000_000, 1)
    }
}

impl Clock for SteppingClock {
    fn now_ms(&self) -> i64 {
        let current = self.next.get();
        self.next.set(current.saturating_add(self.step));
        current
    }
}
