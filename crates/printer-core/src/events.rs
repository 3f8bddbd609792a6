//! Change notifications and the emission observer.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  LogObserver: called for every emission attempt              │
//! │  (before filters, with the raw details and the call site)    │
//! │                                                              │
//! │  PrinterEvent: broadcast after a record is tracked           │
//! │  └── LogAdded: the history changed, re-query it              │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

/// Default capacity for the event broadcast channel
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Callback invoked with `(details, file name, operation, line)` for every
/// emission attempt that gets past the disable flag and release gating.
pub type LogObserver = Arc<dyn Fn(&str, &str, &str, u32) + Send + Sync>;

/// Notification that the tracked history changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterEvent {
    /// A record was appended to the history
    LogAdded,
}

impl fmt::Display for PrinterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrinterEvent::LogAdded => write!(f, "log added"),
        }
    }
}
