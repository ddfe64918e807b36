//! Periodic display recomputation.
//!
//! The ticker only says when the elapsed-time display is due for a refresh.
//! It never blocks and never touches storage; the final session length is
//! computed from the timer's reference point regardless of how often it
//! fired.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};

/// Default refresh cadence.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// A cancellable fixed-interval schedule.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<DateTime<Utc>>,
}

impl Ticker {
    /// Create a cancelled ticker with the given interval.
    ///
    /// Intervals below 1 ms are raised to 1 ms.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        let interval_ms = i64::try_from(interval_ms.max(1)).unwrap_or(i64::MAX);
        Self {
            interval: Duration::milliseconds(interval_ms),
            next_due: None,
        }
    }

    /// Schedule the first tick one interval after `now`.
    pub fn arm(&mut self, now: DateTime<Utc>) {
        self.next_due = Some(now + self.interval);
    }

    /// Cancel any pending tick.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Whether a tick is scheduled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Check whether a tick is due at `now`.
    ///
    /// When due, the next tick is scheduled one interval after `now` and
    /// `true` is returned. Missed ticks are coalesced.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` when cancelled.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<StdDuration> {
        self.next_due.map(|due| {
            due.signed_duration_since(now)
                .to_std()
                .unwrap_or(StdDuration::ZERO)
        })
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL_MS)
    }
}
