//! Display implementation for wtime application messages.
//!
//! All user-facing text is defined here, in one place, so commands only
//! ever pick a [`Message`] variant and its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WORKDAY MESSAGES ===
            Message::WorkStarted(time) => format!("Work started at {}", time),
            Message::BreakStarted(session) => format!("Break started. Session so far: {}", session),
            Message::WorkResumed(session) => format!("Work resumed. Session so far: {}", session),
            Message::WorkdayEnded { date, formatted } => format!("Workday ended. {} recorded for {}", formatted, date),
            Message::ActionUnavailable(reason) => format!("Not available: {}", reason),
            Message::DayReset => "Today's tracked time has been reset. History was not affected.".to_string(),

            // === STATUS MESSAGES ===
            Message::StatusHeader(date) => format!("Work time for {}", date),
            Message::StatusState(state) => format!("Status: {}", state),
            Message::CurrentSession(session) => format!("Current session: {}", session),
            Message::SessionNotStarted => "Current session: — — —".to_string(),
            Message::TotalWorked(total) => format!("Total worked: {}", total),
            Message::GoalProgress { percent, goal } => format!("Goal progress: {:.0}% of {}", percent, goal),

            // === GOAL MESSAGES ===
            Message::GoalReached(goal) => format!("Well done! 🎉 You've completed {} of work today.", goal),

            // === WATCH MESSAGES ===
            Message::WatchNotActive(state) => format!("Nothing to watch: currently {}. Run `wtime start` or `wtime resume` first.", state),
            Message::WatchStarted => "Watching the current session. Press Ctrl-C to stop.".to_string(),
            Message::WatchStopped => "Stopped watching. The session keeps running.".to_string(),
            Message::WatchStateChanged(state) => format!("Session changed elsewhere: now {}", state),
            Message::LiveLine { session, total } => format!("Session {} | Today {}", session, total),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader => "📊 Work History".to_string(),
            Message::HistoryEmpty => "No work days recorded yet. Finish a day with `wtime end` to see it here.".to_string(),
            Message::HistoryNotFoundForDate(date) => format!("No work recorded for {}", date),
            Message::HistoryCleared => "History cleared.".to_string(),
            Message::ConfirmClearHistory => "Clear all history? This cannot be undone.".to_string(),

            // === RESET MESSAGES ===
            Message::ConfirmResetDay => "Reset today's tracked time? This won't affect history.".to_string(),

            // === MANUAL DURATION MESSAGES ===
            Message::ManualDurationHeader { check_in, check_out } => format!("In: {}  Out: {}", check_in, check_out),
            Message::ManualDuration { short, long } => format!("Duration worked: {} ({})", short, long),
            Message::ManualValidationFailed(error) => error.to_string(),

            // === THEME MESSAGES ===
            Message::ThemeCurrent(theme) => format!("Theme: {}", theme),
            Message::ThemeSet(theme) => format!("Theme set to {}", theme),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleTracker => "Tracker settings".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptDailyGoalMinutes => "Enter daily goal (minutes)".to_string(),
            Message::PromptTickInterval => "Enter live refresh interval (milliseconds)".to_string(),
            Message::PromptStoragePath => "Enter data directory".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidDate(date) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", date),
        };
        write!(f, "{}", text)
    }
}
