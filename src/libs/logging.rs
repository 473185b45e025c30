//! Tracing subscriber setup.
//!
//! Logging stays silent unless debug mode is on (see
//! [`is_debug_mode`](super::messages::macros::is_debug_mode)). In debug mode
//! `RUST_LOG` selects the filter, defaulting to `wtime=debug`.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME"))));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
