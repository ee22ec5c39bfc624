//! Rebuild on content changes
//!
//! Implements the `watch` command with:
//! - Debouncing (100ms)
//! - Hash check so editor touch-saves don't trigger rebuilds
//! - Graceful Ctrl+C shutdown
//! - NDJSON output for CI

mod event;
mod sync;

pub use event::{WatchEvent, WatchOptions, DEBOUNCE_MS};
pub use sync::watch;
