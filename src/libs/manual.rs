//! Manual duration calculator.
//!
//! Computes the time between a check-in and a check-out given as 12-hour
//! clock times. The check-out may fall on the following day (one midnight
//! crossing at most); equal times are rejected rather than read as zero or as
//! a full day.
//!
//! ```rust
//! use wtime::libs::manual::{calculate_duration, ClockTime};
//!
//! let check_in: ClockTime = "11:00:00 PM".parse()?;
//! let check_out: ClockTime = "06:00:00 AM".parse()?;
//! let elapsed = calculate_duration(&check_in, &check_out)?;
//! assert_eq!((elapsed.hours, elapsed.minutes, elapsed.seconds), (7, 0, 0));
//! # Ok::<(), wtime::libs::error::ManualError>(())
//! ```

use super::error::ManualError;
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_DAY: u32 = 24 * 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Am,
    Pm,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}

/// A time of day on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
    period: Period,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8, second: u8, period: Period) -> Result<Self, ManualError> {
        if !(1..=12).contains(&hour) {
            return Err(ManualError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(ManualError::InvalidMinute(minute));
        }
        if second > 59 {
            return Err(ManualError::InvalidSecond(second));
        }
        Ok(Self { hour, minute, second, period })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Hour on a 24-hour clock: 12 AM is 0, 12 PM stays 12.
    pub fn hour24(&self) -> u32 {
        let hour = u32::from(self.hour);
        match (self.period, hour) {
            (Period::Am, 12) => 0,
            (Period::Am, h) => h,
            (Period::Pm, 12) => 12,
            (Period::Pm, h) => h + 12,
        }
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour24() * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

/// Midnight, `12:00:00 AM`.
impl Default for ClockTime {
    fn default() -> Self {
        Self {
            hour: 12,
            minute: 0,
            second: 0,
            period: Period::Am,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02} {}", self.hour, self.minute, self.second, self.period)
    }
}

/// Accepts `HH:MM[:SS] AM|PM`, case-insensitive, with or without the space.
impl FromStr for ClockTime {
    type Err = ManualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ManualError::InvalidFormat(s.to_string());
        let trimmed = s.trim();
        if trimmed.len() < 2 || !trimmed.is_char_boundary(trimmed.len() - 2) {
            return Err(invalid());
        }
        let (clock, suffix) = trimmed.split_at(trimmed.len() - 2);
        let period = match suffix.to_ascii_uppercase().as_str() {
            "AM" => Period::Am,
            "PM" => Period::Pm,
            _ => return Err(invalid()),
        };

        let parts: Vec<&str> = clock.trim_end().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }
        let mut fields = parts.iter().map(|p| p.parse::<u8>().map_err(|_| invalid()));
        let hour = fields.next().ok_or_else(invalid)??;
        let minute = fields.next().ok_or_else(invalid)??;
        let second = fields.next().transpose()?.unwrap_or(0);

        ClockTime::new(hour, minute, second, period)
    }
}

/// A duration split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Elapsed {
    pub fn from_seconds(total: u32) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// `8 hours, 30 minutes, 0 seconds`
    pub fn long_form(&self) -> String {
        format!("{} hours, {} minutes, {} seconds", self.hours, self.minutes, self.seconds)
    }
}

/// `8h 30m 00s`
impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {:02}m {:02}s", self.hours, self.minutes, self.seconds)
    }
}

/// Time from `check_in` to `check_out`, wrapping past midnight once.
pub fn calculate_duration(check_in: &ClockTime, check_out: &ClockTime) -> Result<Elapsed, ManualError> {
    let start = check_in.seconds_since_midnight();
    let end = check_out.seconds_since_midnight();

    let diff = if end >= start { end - start } else { end + SECONDS_PER_DAY - start };
    if diff == 0 {
        return Err(ManualError::OutNotAfterIn);
    }

    Ok(Elapsed::from_seconds(diff))
}

/// The two selections of the manual entry form and the outcome of the last
/// calculation: a result or an error, never both.
#[derive(Debug, Clone, Default)]
pub struct ManualForm {
    pub check_in: ClockTime,
    pub check_out: ClockTime,
    outcome: Option<Result<Elapsed, ManualError>>,
}

impl ManualForm {
    pub fn new(check_in: ClockTime, check_out: ClockTime) -> Self {
        Self {
            check_in,
            check_out,
            outcome: None,
        }
    }

    /// Replaces the previous outcome with a fresh calculation.
    pub fn calculate(&mut self) -> Result<Elapsed, ManualError> {
        let outcome = calculate_duration(&self.check_in, &self.check_out);
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Resets both selections to `12:00:00 AM` and drops the outcome.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn result(&self) -> Option<&Elapsed> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }

    pub fn error(&self) -> Option<&ManualError> {
        self.outcome.as_ref().and_then(|o| o.as_ref().err())
    }
}
