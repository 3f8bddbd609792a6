//! Host application lifecycle events.

use std::fmt;

/// Lifecycle transitions a host application can report to the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppEvent {
    DidEnterBackground,
    WillEnterForeground,
    DidBecomeActive,
}

impl AppEvent {
    /// Fixed informational message printed for the event.
    pub fn message(&self) -> &'static str {
        match self {
            AppEvent::DidEnterBackground => "App went to Background.",
            AppEvent::WillEnterForeground => "App will be coming to foreground.",
            AppEvent::DidBecomeActive => "App is in foreground now.",
        }
    }
}

impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
