//! Time formatting utilities for user-friendly display.
//!
//! Durations are tracked in milliseconds but always displayed with whole
//! seconds. The same format is used for the live session, the daily total and
//! the `formatted` field of history entries, so a value shown in the terminal
//! is byte-identical to the one persisted in history.
//!
//! ## Format Specifications
//!
//! - Hours are not padded and not capped: `27h 0m 0s` is valid
//! - Minutes and seconds are not padded
//! - Sub-second remainders are truncated
//!
//! ## Examples
//!
//! ```rust
//! use wtime::libs::formatter::format_time;
//!
//! assert_eq!(format_time(0), "0h 0m 0s");
//! assert_eq!(format_time(3_725_000), "1h 2m 5s");
//! ```

use chrono::NaiveDate;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Formats a millisecond duration as `"{h}h {m}m {s}s"`.
///
/// # Examples
///
/// ```rust
/// use wtime::libs::formatter::format_time;
///
/// assert_eq!(format_time(999), "0h 0m 0s");
/// assert_eq!(format_time(8 * 3_600_000), "8h 0m 0s");
/// assert_eq!(format_time(10_800_000), "3h 0m 0s");
/// ```
pub fn format_time(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

/// Percentage of `goal_ms` covered by `total_ms`, capped at 100.
///
/// A zero goal counts as already reached.
pub fn goal_progress(total_ms: u64, goal_ms: u64) -> f64 {
    if goal_ms == 0 {
        return 100.0;
    }
    ((total_ms as f64 / goal_ms as f64) * 100.0).min(100.0)
}

/// Long form of a history date, e.g. `Saturday, June 1, 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// The `YYYY-MM-DD` key used for history entries.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
