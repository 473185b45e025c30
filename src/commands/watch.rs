//! Live view of the running session.
//!
//! Redraws the session and daily totals once per tick and announces the
//! daily goal the first time it is reached. Each tick also re-reads the
//! stored snapshot, so a `wtime break` or `wtime end` issued from another
//! terminal stops the view. Ctrl-C stops watching but leaves the session
//! running.

use super::open_tracker;
use crate::libs::config::Config;
use crate::libs::formatter::format_time;
use crate::libs::messages::Message;
use crate::libs::ticker::TickerSlot;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use std::io::{self, Write};

pub async fn cmd() -> Result<()> {
    let mut tracker = open_tracker()?;
    if !tracker.state().is_active() {
        msg_info!(Message::WatchNotActive(tracker.state().name().to_string()));
        return Ok(());
    }

    let tracker_config = Config::read()?.tracker.unwrap_or_default();
    let mut slot = TickerSlot::new(tracker_config.tick_interval());
    slot.sync(tracker.state());

    msg_print!(Message::WatchStarted);
    loop {
        let tick = tokio::select! {
            tick = slot.tick() => tick,
            _ = tokio::signal::ctrl_c() => {
                println!();
                msg_info!(Message::WatchStopped);
                break;
            }
        };
        if tick.is_none() {
            break;
        }

        if tracker.reconcile()? {
            println!();
            msg_info!(Message::WatchStateChanged(tracker.state().name().to_string()));
        }

        if let Some(tick) = tracker.tick()? {
            let line = Message::LiveLine {
                session: format_time(tick.live_ms),
                total: format_time(tick.running_total_ms),
            };
            print!("\r{}", line);
            io::stdout().flush()?;

            if tick.goal_reached {
                println!();
                msg_success!(Message::GoalReached(format_time(tracker.goal_ms())));
            }
        }

        slot.sync(tracker.state());
    }
    Ok(())
}
