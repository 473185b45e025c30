//! Work session tracker: the state machine wired to storage and a clock.
//!
//! [`Tracker`] owns a [`Session`], a [`KeyValueStore`] and a [`Clock`]. Every
//! successful transition is followed by an unconditional overwrite of the
//! session snapshot, so any later process (or a restart of this one) can pick
//! up exactly where this one left off via [`Tracker::restore`].
//!
//! ## Lifecycle
//!
//! ```rust,no_run
//! use wtime::libs::clock::SystemClock;
//! use wtime::libs::storage::FileStore;
//! use wtime::libs::tracker::Tracker;
//!
//! let mut tracker = Tracker::restore(FileStore::open_default()?, SystemClock)?;
//! tracker.start()?;
//! tracker.take_break()?;
//! tracker.resume()?;
//! let entry = tracker.end()?;
//! println!("{} worked on {}", entry.formatted, entry.date);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Day boundary
//!
//! A day closes only when [`Tracker::end`] runs. The history date is the
//! clock's current date at that moment, so a session spanning midnight is
//! attributed entirely to the date on which it ended.

use super::clock::Clock;
use super::confirm::ConfirmGate;
use super::error::TrackerResult;
use super::history::{History, HistoryEntry};
use super::messages::Message;
use super::session::{Session, SessionState, Snapshot, EIGHT_HOURS_MS};
use super::storage::{KeyValueStore, SESSION_KEY};
use anyhow::Result;

/// What a single tick of the live timer observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Current session time.
    pub live_ms: u64,
    /// Daily total including the current session.
    pub running_total_ms: u64,
    /// `true` exactly once per day, on the tick that reached the goal.
    pub goal_reached: bool,
}

pub struct Tracker<S: KeyValueStore, C: Clock> {
    session: Session,
    store: S,
    clock: C,
    goal_ms: u64,
    /// `lastUpdatedAt` of the snapshot this tracker last wrote or read.
    last_seen: Option<i64>,
}

impl<S: KeyValueStore, C: Clock> Tracker<S, C> {
    /// Loads the persisted snapshot, or starts idle if there is none.
    ///
    /// A snapshot that fails to parse is logged and treated as absent.
    pub fn restore(store: S, clock: C) -> Result<Self> {
        let now = clock.now_ms();
        let snapshot = read_snapshot(&store)?;
        let session = snapshot.as_ref().map(|s| Session::restore(s, now)).unwrap_or_default();
        let last_seen = snapshot.and_then(|s| s.last_updated_at);

        tracing::debug!(state = ?session.state(), accumulated_ms = session.accumulated_ms(), "session restored");

        Ok(Self {
            session,
            store,
            clock,
            goal_ms: EIGHT_HOURS_MS,
            last_seen,
        })
    }

    /// Overrides the daily goal (8 hours by default).
    pub fn with_goal_ms(mut self, goal_ms: u64) -> Self {
        self.goal_ms = goal_ms;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn goal_ms(&self) -> u64 {
        self.goal_ms
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    pub fn live_ms(&self) -> Option<u64> {
        self.session.live_ms(self.clock.now_ms())
    }

    pub fn running_total_ms(&self) -> u64 {
        self.session.running_total_ms(self.clock.now_ms())
    }

    pub fn start(&mut self) -> TrackerResult<()> {
        let now = self.clock.now_ms();
        self.session.start(now)?;
        tracing::info!(now, "work started");
        self.persist(now)?;
        Ok(())
    }

    pub fn take_break(&mut self) -> TrackerResult<()> {
        let now = self.clock.now_ms();
        self.session.take_break(now)?;
        tracing::info!(accumulated_ms = self.session.accumulated_ms(), "break started");
        self.persist(now)?;
        Ok(())
    }

    pub fn resume(&mut self) -> TrackerResult<()> {
        let now = self.clock.now_ms();
        self.session.resume(now)?;
        tracing::info!(now, "work resumed");
        self.persist(now)?;
        Ok(())
    }

    /// Closes the day and records it in history under today's date.
    pub fn end(&mut self) -> TrackerResult<HistoryEntry> {
        let now = self.clock.now_ms();
        let today = self.clock.today();
        let mut history = History::load(&self.store)?;

        let closed = self.session.end(now)?;
        let entry = history.record(today, closed.day_total_ms).clone();
        history.save(&mut self.store)?;
        self.persist(now)?;

        tracing::info!(date = %entry.date, session_ms = closed.session_ms, total_ms = closed.day_total_ms, "work day ended");
        Ok(entry)
    }

    /// Clears the session and deletes the stored snapshot once `gate` agrees.
    /// History is not affected. Returns whether the reset happened.
    pub fn reset(&mut self, gate: &dyn ConfirmGate) -> Result<bool> {
        if !gate.confirm(&Message::ConfirmResetDay.to_string())? {
            tracing::debug!("reset declined");
            return Ok(false);
        }
        self.session = Session::default();
        self.store.remove(SESSION_KEY)?;
        self.last_seen = None;
        tracing::info!("day reset");
        Ok(true)
    }

    /// Recomputes the live session and checks the daily goal.
    ///
    /// Picks up any snapshot written by another process first, so the latch
    /// write below never overwrites a newer state. Returns `None` unless a
    /// segment is open. When the goal is reached for the first time the latch
    /// is persisted immediately.
    pub fn tick(&mut self) -> Result<Option<Tick>> {
        self.reconcile()?;
        let now = self.clock.now_ms();
        if !self.session.state().is_active() {
            return Ok(None);
        }
        let goal_reached = self.session.check_goal(now, self.goal_ms);
        if goal_reached {
            tracing::info!(goal_ms = self.goal_ms, "daily goal reached");
            self.persist(now)?;
        }
        Ok(Some(Tick {
            live_ms: self.session.live_ms(now).unwrap_or(0),
            running_total_ms: self.session.running_total_ms(now),
            goal_reached,
        }))
    }

    /// Re-reads the stored snapshot and adopts it if another process wrote
    /// it since this tracker last did. Returns `true` if the state was replaced.
    pub fn reconcile(&mut self) -> Result<bool> {
        let snapshot = read_snapshot(&self.store)?;
        let stored = snapshot.as_ref().and_then(|s| s.last_updated_at);
        if stored == self.last_seen {
            return Ok(false);
        }
        let now = self.clock.now_ms();
        self.session = snapshot.as_ref().map(|s| Session::restore(s, now)).unwrap_or_default();
        self.last_seen = stored;
        tracing::debug!(state = ?self.session.state(), "adopted externally written session");
        Ok(true)
    }

    pub fn history(&self) -> Result<History> {
        History::load(&self.store)
    }

    /// Deletes all history once `gate` agrees. Returns whether it happened.
    pub fn clear_history(&mut self, gate: &dyn ConfirmGate) -> Result<bool> {
        if !gate.confirm(&Message::ConfirmClearHistory.to_string())? {
            return Ok(false);
        }
        History::load(&self.store)?.clear(&mut self.store)?;
        tracing::info!("history cleared");
        Ok(true)
    }

    fn persist(&mut self, now: i64) -> Result<()> {
        let snapshot = self.session.to_snapshot(now);
        self.store.set(SESSION_KEY, &snapshot.to_json()?)?;
        self.last_seen = snapshot.last_updated_at;
        Ok(())
    }
}

fn read_snapshot(store: &impl KeyValueStore) -> Result<Option<Snapshot>> {
    let Some(json) = store.get(SESSION_KEY)? else {
        return Ok(None);
    };
    match Snapshot::from_json(&json) {
        Ok(snapshot) => Ok(Some(snapshot)),
        Err(e) => {
            tracing::warn!(error = %e, "session snapshot is malformed, starting idle");
            Ok(None)
        }
    }
}
