//! # wtime - Work Time tracker
//!
//! A command-line utility for tracking working time across breaks, with a
//! daily goal, per-day history and a manual duration calculator.
//!
//! ## Features
//!
//! - **Session Tracking**: start, break, resume and end a work day
//! - **Restart Safety**: every change is persisted; time keeps counting while no process runs
//! - **Daily Goal**: a one-shot notification when the goal (8 hours by default) is reached
//! - **History**: one entry per finished work day
//! - **Manual Calculator**: duration between two 12-hour clock times, across midnight
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wtime::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
