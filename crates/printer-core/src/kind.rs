//! Log kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed category of a log entry.
///
/// Every kind except [`LogKind::Plain`] is printed with an emoji and a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Success,
    Error,
    Warning,
    Information,
    Alert,
    Plain,
}

impl LogKind {
    /// All kinds, in declaration order.
    pub const ALL: [LogKind; 6] = [
        LogKind::Success,
        LogKind::Error,
        LogKind::Warning,
        LogKind::Information,
        LogKind::Alert,
        LogKind::Plain,
    ];

    /// Lowercase name, as used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Success => "success",
            LogKind::Error => "error",
            LogKind::Warning => "warning",
            LogKind::Information => "information",
            LogKind::Alert => "alert",
            LogKind::Plain => "plain",
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, LogKind::Plain)
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`LogKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown log kind: {0}")]
pub struct ParseLogKindError(pub String);

impl FromStr for LogKind {
    type Err = ParseLogKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(LogKind::Success),
            "error" => Ok(LogKind::Error),
            "warning" | "warn" => Ok(LogKind::Warning),
            "information" | "info" => Ok(LogKind::Information),
            "alert" => Ok(LogKind::Alert),
            "plain" => Ok(LogKind::Plain),
            other => Err(ParseLogKindError(other.to_string())),
        }
    }
}
