//! Domain error types.
//!
//! Command plumbing uses `anyhow`; the state machine and the manual
//! calculator expose typed errors so callers can tell a rejected action from a
//! storage failure.

use super::session::Action;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// The action is not available in the current state. Nothing was changed.
    #[error("cannot {action} while {state}")]
    IllegalTransition { action: Action, state: &'static str },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManualError {
    #[error("Out time must be after In time")]
    OutNotAfterIn,

    #[error("Hour must be between 1 and 12, got {0}")]
    InvalidHour(u8),

    #[error("Minute must be between 0 and 59, got {0}")]
    InvalidMinute(u8),

    #[error("Second must be between 0 and 59, got {0}")]
    InvalidSecond(u8),

    #[error("Invalid time '{0}', expected HH:MM[:SS] AM|PM")]
    InvalidFormat(String),
}
