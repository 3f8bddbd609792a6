//! Printer configuration.
//!
//! Every field has a default, so a config file only needs the fields it
//! changes:
//!
//! ```json
//! {
//!   "keep_tracking": true,
//!   "log_dir": "/tmp/Printer",
//!   "style": { "success_title": "Done", "hide_timestamp": true }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PrinterResult;
use crate::style::LogStyle;

/// Which kind of build the host application is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Derived from `debug_assertions`.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}

/// What a debug-only printer does with a log in a release build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseBehavior {
    /// Drop the log without a trace
    Silent,
    /// Print a fixed notice in place of the log
    #[default]
    Notice,
}

/// Startup configuration for a [`Printer`](crate::Printer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Block every log, immediately and without side effects
    pub disabled: bool,
    /// Print every log with the plain layout
    pub plain_log: bool,
    /// Print a separator rule after each log
    pub add_line_after_each_print: bool,
    /// Only print in debug builds
    pub debug_only: bool,
    /// Keep printed logs in memory for later retrieval
    pub keep_tracking: bool,
    /// Attach and print the call site of every log
    pub auto_tracing: bool,
    pub build_mode: BuildMode,
    pub release_behavior: ReleaseBehavior,
    /// Directory for saved log files; defaults to `<documents>/Printer`
    pub log_dir: Option<PathBuf>,
    pub style: LogStyle,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            plain_log: false,
            add_line_after_each_print: false,
            debug_only: true,
            keep_tracking: false,
            auto_tracing: true,
            build_mode: BuildMode::current(),
            release_behavior: ReleaseBehavior::Notice,
            log_dir: None,
            style: LogStyle::default(),
        }
    }
}

impl PrinterConfig {
    pub fn from_json_str(json: &str) -> PrinterResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> PrinterResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "Loaded printer config");
        Ok(config)
    }

    /// Whether the release gate blocks logs under this config.
    pub fn release_gated(&self) -> bool {
        release_gated(self.debug_only, self.build_mode)
    }
}

/// A debug-only printer running in a release build prints nothing of its own.
pub(crate) fn release_gated(debug_only: bool, build_mode: BuildMode) -> bool {
    debug_only && build_mode == BuildMode::Release
}
