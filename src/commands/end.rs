//! End the work day.
//!
//! The day's total is written to history under today's date, replacing any
//! earlier entry for the same date, and the tracker returns to idle.

use super::{open_tracker, unless_unavailable};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut tracker = open_tracker()?;
    if let Some(entry) = unless_unavailable(tracker.end())? {
        msg_success!(Message::WorkdayEnded {
            date: entry.date,
            formatted: entry.formatted,
        });
    }
    Ok(())
}
