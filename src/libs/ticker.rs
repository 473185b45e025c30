//! Periodic tick source for the live session display.
//!
//! A [`Ticker`] runs a background task that emits one tick per period. It
//! lives exactly as long as the value: dropping it aborts the task, so there
//! is no way to leave a timer firing after its owner is gone.
//!
//! [`TickerSlot`] ties a ticker to the session state. After every state
//! change the owner calls [`TickerSlot::sync`]: entering Active starts a
//! ticker, any other state drops it.

use super::session::SessionState;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug)]
pub struct Ticker {
    ticks: mpsc::Receiver<Instant>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Starts ticking every `period`; the first tick arrives after one period.
    /// Must be called from within a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                let at = interval.tick().await;
                if tx.send(at).await.is_err() {
                    break;
                }
            }
        });
        tracing::trace!(?period, "ticker started");
        Self { ticks, handle }
    }

    /// Waits for the next tick.
    pub async fn tick(&mut self) -> Option<Instant> {
        self.ticks.recv().await
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::trace!("ticker stopped");
    }
}

/// Holds a [`Ticker`] only while the session is Active.
#[derive(Debug)]
pub struct TickerSlot {
    period: Duration,
    ticker: Option<Ticker>,
}

impl TickerSlot {
    pub fn new(period: Duration) -> Self {
        Self { period, ticker: None }
    }

    /// Starts or stops the ticker to match `state`.
    pub fn sync(&mut self, state: SessionState) {
        match (state.is_active(), self.ticker.is_some()) {
            (true, false) => self.ticker = Some(Ticker::start(self.period)),
            (false, true) => self.ticker = None,
            _ => {}
        }
    }

    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Waits for the next tick, or returns `None` at once when disarmed.
    pub async fn tick(&mut self) -> Option<Instant> {
        match self.ticker.as_mut() {
            Some(ticker) => ticker.tick().await,
            None => None,
        }
    }
}
