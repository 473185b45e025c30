//! Per-day history of finished work days.
//!
//! Without flags the whole history is listed, newest day first. `--date`
//! looks up a single day and `--clear` wipes everything after confirmation.

use super::open_tracker;
use crate::libs::confirm::gate_for;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Show a single day (YYYY-MM-DD or 'today')
    #[arg(short, long)]
    date: Option<String>,
    /// Delete all recorded days
    #[arg(long, conflicts_with = "date")]
    clear: bool,
    /// Skip confirmation prompt when clearing
    #[arg(long, requires = "clear")]
    force: bool,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let mut tracker = open_tracker()?;

    if args.clear {
        if tracker.clear_history(gate_for(args.force).as_ref())? {
            msg_success!(Message::HistoryCleared);
        } else {
            msg_info!(Message::OperationCancelled);
        }
        return Ok(());
    }

    let history = tracker.history()?;

    if let Some(date) = args.date {
        let date = parse_date(&date)?;
        match history.get(date) {
            Some(entry) => View::history([entry]),
            None => msg_info!(Message::HistoryNotFoundForDate(date.format("%Y-%m-%d").to_string())),
        }
        return Ok(());
    }

    if history.is_empty() {
        msg_info!(Message::HistoryEmpty);
        return Ok(());
    }

    msg_print!(Message::HistoryHeader, true);
    View::history(history.newest_first());
    Ok(())
}

/// Parses `YYYY-MM-DD` or `today`. The error carries no prefix; `main` adds it.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    if date.to_lowercase() == "today" {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| anyhow!("{}", Message::InvalidDate(date.to_string())))
}
