pub mod calc;
pub mod end;
pub mod history;
pub mod init;
pub mod pause;
pub mod reset;
pub mod resume;
pub mod start;
pub mod status;
pub mod theme;
pub mod watch;

use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::error::{TrackerError, TrackerResult};
use crate::libs::messages::Message;
use crate::libs::storage::FileStore;
use crate::libs::tracker::Tracker;
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Start the work day")]
    Start,
    #[command(about = "Take a break")]
    Break,
    #[command(about = "Resume work after a break")]
    Resume,
    #[command(about = "End the work day and record it in history")]
    End,
    #[command(about = "Show the current session and today's total")]
    Status,
    #[command(about = "Show the session live and notify when the daily goal is reached")]
    Watch,
    #[command(about = "Reset today's tracked time")]
    Reset(reset::ResetArgs),
    #[command(about = "Show or clear the history of finished work days")]
    History(history::HistoryArgs),
    #[command(about = "Calculate the duration between two 12-hour clock times")]
    Calc(calc::CalcArgs),
    #[command(about = "Show, set or cycle the theme preference")]
    Theme(theme::ThemeArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Start => start::cmd(),
            Commands::Break => pause::cmd(),
            Commands::Resume => resume::cmd(),
            Commands::End => end::cmd(),
            Commands::Status => status::cmd(),
            Commands::Watch => watch::cmd().await,
            Commands::Reset(args) => reset::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Calc(args) => calc::cmd(args),
            Commands::Theme(args) => theme::cmd(args),
            Commands::Init(args) => init::cmd(args),
        }
    }
}

/// Restores the tracker from the configured data directory.
pub(crate) fn open_tracker() -> Result<Tracker<FileStore, SystemClock>> {
    let tracker_config = Config::read()?.tracker.unwrap_or_default();
    let tracker = Tracker::restore(FileStore::open_default()?, SystemClock)?.with_goal_ms(tracker_config.daily_goal_ms());
    Ok(tracker)
}

/// Turns a rejected transition into a warning. Storage errors still propagate.
pub(crate) fn unless_unavailable<T>(result: TrackerResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e @ TrackerError::IllegalTransition { .. }) => {
            msg_warning!(Message::ActionUnavailable(e.to_string()));
            Ok(None)
        }
        Err(TrackerError::Storage(e)) => Err(e),
    }
}
