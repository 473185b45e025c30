//! Take a break: closes the open segment and freezes the session time.

use super::{open_tracker, unless_unavailable};
use crate::libs::formatter::format_time;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut tracker = open_tracker()?;
    if unless_unavailable(tracker.take_break())?.is_some() {
        let session = tracker.live_ms().unwrap_or(0);
        msg_success!(Message::BreakStarted(format_time(session)));
    }
    Ok(())
}
