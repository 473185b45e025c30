//! Core library modules for the wtime application.
//!
//! ## Features
//!
//! - **Time Tracking**: session state machine, tracker, live ticker
//! - **Persistence**: key-value storage port, per-day history, theme preference
//! - **Manual Entry**: 12-hour clock parsing and duration calculation
//! - **Infrastructure**: configuration, data directory, logging, messages
//!
//! ## Usage
//!
//! ```rust
//! use wtime::libs::clock::ManualClock;
//! use wtime::libs::storage::MemoryStore;
//! use wtime::libs::tracker::Tracker;
//!
//! let clock = ManualClock::new(0);
//! let mut tracker = Tracker::restore(MemoryStore::new(), clock.clone())?;
//! tracker.start()?;
//! clock.advance_mins(90);
//! assert_eq!(tracker.live_ms(), Some(90 * 60_000));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod clock;
pub mod config;
pub mod confirm;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod history;
pub mod logging;
pub mod manual;
pub mod messages;
pub mod session;
pub mod storage;
pub mod theme;
pub mod ticker;
pub mod tracker;
pub mod view;
