#[derive(Debug, Clone)]
pub enum Message {
    // === WORKDAY MESSAGES ===
    WorkStarted(String), // time of day
    BreakStarted(String), // session so far
    WorkResumed(String),  // session so far
    WorkdayEnded {
        date: String,
        formatted: String,
    },
    ActionUnavailable(String), // reason
    DayReset,

    // === STATUS MESSAGES ===
    StatusHeader(String),     // date
    StatusState(String),      // state name
    CurrentSession(String),   // formatted session
    SessionNotStarted,
    TotalWorked(String), // formatted total
    GoalProgress {
        percent: f64,
        goal: String,
    },

    // === GOAL MESSAGES ===
    GoalReached(String), // formatted goal

    // === WATCH MESSAGES ===
    WatchNotActive(String), // state name
    WatchStarted,
    WatchStopped,
    WatchStateChanged(String), // state name
    LiveLine {
        session: String,
        total: String,
    },

    // === HISTORY MESSAGES ===
    HistoryHeader,
    HistoryEmpty,
    HistoryNotFoundForDate(String),
    HistoryCleared,
    ConfirmClearHistory,

    // === RESET MESSAGES ===
    ConfirmResetDay,

    // === MANUAL DURATION MESSAGES ===
    ManualDurationHeader {
        check_in: String,
        check_out: String,
    },
    ManualDuration {
        short: String,
        long: String,
    },
    ManualValidationFailed(String), // error

    // === THEME MESSAGES ===
    ThemeCurrent(String),
    ThemeSet(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleTracker,
    ConfigModuleStorage,
    PromptSelectModules,
    PromptDailyGoalMinutes,
    PromptTickInterval,
    PromptStoragePath,

    // === GENERIC MESSAGES ===
    OperationCancelled,
    InvalidDate(String),
}
