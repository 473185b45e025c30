use super::open_tracker;
use crate::libs::formatter::{format_long_date, format_time, goal_progress};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let tracker = open_tracker()?;
    let total = tracker.running_total_ms();

    msg_print!(Message::StatusHeader(format_long_date(Local::now().date_naive())), true);
    msg_print!(Message::StatusState(tracker.state().name().to_string()));
    match tracker.live_ms() {
        Some(session) => msg_print!(Message::CurrentSession(format_time(session))),
        None => msg_print!(Message::SessionNotStarted),
    }
    msg_print!(Message::TotalWorked(format_time(total)));
    msg_print!(Message::GoalProgress {
        percent: goal_progress(total, tracker.goal_ms()),
        goal: format_time(tracker.goal_ms()),
    });
    Ok(())
}
