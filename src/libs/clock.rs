//! Wall-clock source for the tracker.
//!
//! All tracker arithmetic works on epoch milliseconds read from a [`Clock`],
//! so tests can drive time explicitly with [`ManualClock`].
//!
//! ## History dates
//!
//! [`SystemClock::today`] is the calendar date in the host's local timezone,
//! not the UTC date. A day ended at 01:00 local time in UTC+3 is recorded
//! under the local date even though it is still the previous day in UTC.
//! [`ManualClock::today`] uses UTC so that tests give the same dates on any
//! host.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Provides the current instant and calendar date.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;

    /// Calendar date used to key history entries.
    fn today(&self) -> NaiveDate;
}

/// The host clock, with dates taken in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that only moves when told to. Clones share the same instant.
///
/// Dates are derived from the instant in UTC so that tests are independent
/// of the host timezone.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(now_ms: i64) -> Self {
        Self { now: Arc::new(AtomicI64::new(now_ms)) }
    }

    /// Starts at the given UTC date and time.
    pub fn at(date_time: DateTime<Utc>) -> Self {
        Self::new(date_time.timestamp_millis())
    }

    pub fn set(&self, now_ms: i64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance_ms(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.advance_ms(secs * 1000);
    }

    pub fn advance_mins(&self, mins: i64) {
        self.advance_ms(mins * 60_000);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn today(&self) -> NaiveDate {
        DateTime::<Utc>::from_timestamp_millis(self.now_ms()).unwrap_or_default().date_naive()
    }
}

/// Milliseconds elapsed between two instants, clamped at zero when the clock
/// moved backwards.
pub fn elapsed_ms(since: i64, now: i64) -> u64 {
    now.saturating_sub(since).max(0) as u64
}
