//! Emission filters.
//!
//! Two independent checks, both of which must pass:
//! - a kind allow-list (empty means every kind passes)
//! - an origin deny-list (files whose logs are skipped)

use crate::kind::LogKind;

/// Current filter configuration, read on every emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    kinds: Vec<LogKind>,
    skipped_origins: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a log of `kind` coming from `origin` should be emitted.
    pub fn should_emit(&self, kind: LogKind, origin: &str) -> bool {
        self.allows_kind(kind) && !self.is_origin_skipped(origin)
    }

    /// The kind half of [`FilterState::should_emit`].
    pub fn allows_kind(&self, kind: LogKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }

    /// Replace the kind allow-list. Duplicates are dropped.
    pub fn set_kinds(&mut self, kinds: impl IntoIterator<Item = LogKind>) {
        self.kinds.clear();
        for kind in kinds {
            if !self.kinds.contains(&kind) {
                self.kinds.push(kind);
            }
        }
    }

    pub fn kinds(&self) -> &[LogKind] {
        &self.kinds
    }

    /// Stop emitting logs from `origin`. Adding an origin twice is a no-op.
    pub fn skip_origin(&mut self, origin: impl Into<String>) {
        let origin = origin.into();
        if !self.skipped_origins.contains(&origin) {
            self.skipped_origins.push(origin);
        }
    }

    /// Emit logs from `origin` again.
    pub fn allow_origin(&mut self, origin: &str) {
        self.skipped_origins.retain(|o| o != origin);
    }

    pub fn skipped_origins(&self) -> &[String] {
        &self.skipped_origins
    }

    pub fn is_origin_skipped(&self, origin: &str) -> bool {
        self.skipped_origins.iter().any(|o| o == origin)
    }
}
