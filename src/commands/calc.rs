//! Manual duration calculator.
//!
//! Works on two 12-hour clock times and nothing else: no session state is
//! read or written. An Out time at or before the In time is taken to be on
//! the next day, as long as it is not the very same time.

use crate::libs::manual::{ClockTime, ManualForm};
use crate::libs::messages::Message;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Check-in time, e.g. "09:00 AM" or "9:00:30pm"
    #[arg(long = "in", value_name = "TIME")]
    check_in: ClockTime,
    /// Check-out time, e.g. "05:30 PM"
    #[arg(long = "out", value_name = "TIME")]
    check_out: ClockTime,
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let mut form = ManualForm::new(args.check_in, args.check_out);

    msg_print!(Message::ManualDurationHeader {
        check_in: form.check_in.to_string(),
        check_out: form.check_out.to_string(),
    });
    match form.calculate() {
        Ok(elapsed) => msg_success!(Message::ManualDuration {
            short: elapsed.to_string(),
            long: elapsed.long_form(),
        }),
        Err(e) => msg_error!(Message::ManualValidationFailed(e.to_string())),
    }
    Ok(())
}
