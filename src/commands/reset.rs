use super::open_tracker;
use crate::libs::confirm::gate_for;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,
}

pub fn cmd(args: ResetArgs) -> Result<()> {
    let mut tracker = open_tracker()?;
    if tracker.reset(gate_for(args.force).as_ref())? {
        msg_success!(Message::DayReset);
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}
