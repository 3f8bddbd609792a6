//! Tracked log records and the in-memory history.

use serde::{Deserialize, Serialize};

use crate::kind::LogKind;
use crate::trace::TraceInfo;

/// One emitted log, exactly as it was printed.
///
/// Records are built once by the [`Printer`](crate::Printer) and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Caller-supplied identifier, may be empty
    pub id: String,
    /// Message body
    pub details: String,
    pub kind: LogKind,
    /// Timestamp as rendered at emission time; empty if timestamps were hidden
    pub timestamp: String,
    /// Call site, present when auto-tracing was on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<TraceInfo>,
    /// The line that was printed
    pub rendered: String,
    /// The trace line that was printed after it, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_trace: Option<String>,
}

impl LogRecord {
    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON line.
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Append-only history of tracked records, in emission order.
///
/// Growth is unbounded; callers clear it with [`RecordStore::clear`].
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<LogRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    /// Full history in insertion order.
    pub fn all(&self) -> &[LogRecord] {
        &self.records
    }

    /// Records whose kind is in `kinds`, in insertion order.
    pub fn filtered(&self, kinds: &[LogKind]) -> Vec<LogRecord> {
        self.records
            .iter()
            .filter(|r| kinds.contains(&r.kind))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
