//! Work session state machine and its persisted snapshot.
//!
//! A [`Session`] is always in exactly one [`SessionState`]:
//!
//! ```text
//!            start               break
//!   Idle ───────────▶ Active ───────────▶ Paused
//!    ▲                 │   ▲                │
//!    │       end       │   └─── resume ─────┤
//!    └─────────────────┴────────────────────┘
//!                                 end
//! ```
//!
//! Transitions take the current instant explicitly and never read a clock
//! themselves. A transition attempted from a state that does not allow it
//! returns [`TrackerError::IllegalTransition`] and leaves the session
//! untouched.
//!
//! The on-disk [`Snapshot`] keeps the flat flag layout (`isWorking`,
//! `isOnBreak`, `inTime`, ...) so that stored files stay readable by older
//! builds, but it is only a serialization format: [`Session::restore`] turns it
//! back into a tagged state, folding the time that elapsed while no process
//! was running into the accumulated session time.

use super::clock::elapsed_ms;
use super::error::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default daily goal: 8 hours.
pub const EIGHT_HOURS_MS: u64 = 8 * 60 * 60 * 1000;

/// User actions that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Break,
    Resume,
    End,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Start => "start work",
            Action::Break => "take a break",
            Action::Resume => "resume work",
            Action::End => "end work",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Not working.
    #[default]
    Idle,
    /// Working; the open segment began at `in_time` (epoch ms).
    Active { in_time: i64 },
    /// Working, on break. No segment is open.
    Paused,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "not working",
            SessionState::Active { .. } => "working",
            SessionState::Paused => "on break",
        }
    }

    pub fn is_working(&self) -> bool {
        !matches!(self, SessionState::Idle)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active { .. })
    }
}

/// Result of ending a work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClose {
    /// Worked time of the session that just ended.
    pub session_ms: u64,
    /// Committed daily total including that session.
    pub day_total_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    state: SessionState,
    /// Worked time from segments closed before the open one.
    accumulated_ms: u64,
    /// Committed total of the current day.
    total_ms: u64,
    /// Set once the daily goal notification has fired.
    goal_notified: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn goal_notified(&self) -> bool {
        self.goal_notified
    }

    fn reject(&self, action: Action) -> TrackerError {
        TrackerError::IllegalTransition { action, state: self.state.name() }
    }

    pub fn start(&mut self, now: i64) -> TrackerResult<()> {
        if self.state != SessionState::Idle {
            return Err(self.reject(Action::Start));
        }
        self.state = SessionState::Active { in_time: now };
        self.accumulated_ms = 0;
        self.goal_notified = false;
        Ok(())
    }

    pub fn take_break(&mut self, now: i64) -> TrackerResult<()> {
        let SessionState::Active { in_time } = self.state else {
            return Err(self.reject(Action::Break));
        };
        self.accumulated_ms += elapsed_ms(in_time, now);
        self.state = SessionState::Paused;
        Ok(())
    }

    pub fn resume(&mut self, now: i64) -> TrackerResult<()> {
        if self.state != SessionState::Paused {
            return Err(self.reject(Action::Resume));
        }
        self.state = SessionState::Active { in_time: now };
        Ok(())
    }

    /// Closes the work day: the final session time is folded into the daily
    /// total, which is returned and then cleared together with the session.
    pub fn end(&mut self, now: i64) -> TrackerResult<DayClose> {
        let session_ms = match self.state {
            SessionState::Idle => return Err(self.reject(Action::End)),
            SessionState::Paused => self.accumulated_ms,
            SessionState::Active { in_time } => self.accumulated_ms + elapsed_ms(in_time, now),
        };
        let day_total_ms = self.total_ms + session_ms;

        *self = Session::default();

        Ok(DayClose { session_ms, day_total_ms })
    }

    /// Worked time of the current session at `now`.
    ///
    /// Frozen at the accumulated value while on break, `None` while idle.
    pub fn live_ms(&self, now: i64) -> Option<u64> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Paused => Some(self.accumulated_ms),
            SessionState::Active { in_time } => Some(self.accumulated_ms + elapsed_ms(in_time, now)),
        }
    }

    /// Daily total including the running session.
    pub fn running_total_ms(&self, now: i64) -> u64 {
        self.total_ms + self.live_ms(now).unwrap_or(0)
    }

    /// Flips the goal latch the first time the running total reaches
    /// `goal_ms`. Returns `true` only on that first crossing, and only while a
    /// segment is open.
    pub fn check_goal(&mut self, now: i64, goal_ms: u64) -> bool {
        if self.goal_notified || !self.state.is_active() {
            return false;
        }
        if self.running_total_ms(now) >= goal_ms {
            self.goal_notified = true;
            return true;
        }
        false
    }

    /// Serializes the session as of `now`.
    ///
    /// An open segment is split at `now`: its elapsed part goes into
    /// `sessionAccumulatedMs` and `inTime` becomes `now`, so the snapshot always
    /// accounts for all worked time up to `lastUpdatedAt`.
    pub fn to_snapshot(&self, now: i64) -> Snapshot {
        let (is_working, is_on_break, in_time) = match self.state {
            SessionState::Idle => (false, false, None),
            SessionState::Active { .. } => (true, false, Some(now)),
            SessionState::Paused => (true, true, None),
        };
        Snapshot {
            is_working,
            is_on_break,
            in_time,
            session_accumulated_ms: self.live_ms(now).unwrap_or(0),
            total_ms: self.total_ms,
            eight_hour_notified: self.goal_notified,
            last_updated_at: Some(now),
        }
    }

    /// Rebuilds a session from a snapshot written at `snapshot.last_updated_at`.
    ///
    /// - Idle: session fields are zeroed; the daily total and latch are kept.
    /// - Paused: accumulated time is restored verbatim; breaks do not accrue.
    /// - Active: the time since the last write is folded into the accumulated
    ///   time and the open segment is re-anchored at `now`.
    pub fn restore(snapshot: &Snapshot, now: i64) -> Self {
        let state = match (snapshot.is_working, snapshot.is_on_break) {
            (false, _) => SessionState::Idle,
            (true, true) => SessionState::Paused,
            (true, false) => SessionState::Active { in_time: now },
        };
        let accumulated_ms = match state {
            SessionState::Idle => 0,
            SessionState::Paused => snapshot.session_accumulated_ms,
            SessionState::Active { .. } => {
                let last_updated_at = snapshot.last_updated_at.unwrap_or(now);
                snapshot.session_accumulated_ms + elapsed_ms(last_updated_at, now)
            }
        };
        Session {
            state,
            accumulated_ms,
            total_ms: snapshot.total_ms,
            goal_notified: snapshot.eight_hour_notified,
        }
    }
}

/// Persisted form of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub is_working: bool,
    pub is_on_break: bool,
    pub in_time: Option<i64>,
    pub session_accumulated_ms: u64,
    pub total_ms: u64,
    pub eight_hour_notified: bool,
    pub last_updated_at: Option<i64>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
