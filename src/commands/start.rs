use super::{open_tracker, unless_unavailable};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let mut tracker = open_tracker()?;
    if unless_unavailable(tracker.start())?.is_some() {
        msg_success!(Message::WorkStarted(Local::now().format("%H:%M:%S").to_string()));
    }
    Ok(())
}
