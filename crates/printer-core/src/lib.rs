//! Printer Core Library
//!
//! A fancy way to print logs: emojis, titles, timestamps and call sites,
//! with filters, an in-memory history and plain-text log files.
//!
//! ## Overview
//!
//! ```text
//! [✅ Success] [⌚04-26-2017 16:39:39] [🆔 001] ➞ ✹✹This is a Success message.✹✹
//! [Trace] ➞ main.rs ➞ run #12
//! ```
//!
//! - **Kinds**: success, error, warning, information, alert and plain
//! - **Filters**: print only some kinds, skip whole source files
//! - **Tracking**: keep printed logs, query them, save them to a file
//!
//! ## Quick Start
//!
//! ```no_run
//! use printer_core::{call_site, LogKind, Printer, PrinterConfig};
//!
//! let printer = Printer::new(PrinterConfig {
//!     keep_tracking: true,
//!     ..PrinterConfig::default()
//! });
//!
//! printer.show("001", "This is a Success message.", LogKind::Success, call_site!());
//! printer.error("", "Something went wrong.", call_site!());
//!
//! let successes = printer.filtered_logs(&[LogKind::Success]);
//! printer.save_logs(&successes);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod format;
pub mod kind;
pub mod lifecycle;
pub mod printer;
pub mod record;
pub mod sink;
pub mod style;
pub mod trace;
pub mod writer;

// Re-exports
pub use config::{BuildMode, PrinterConfig, ReleaseBehavior};
pub use error::{PrinterError, PrinterResult};
pub use events::{LogObserver, PrinterEvent};
pub use filter::FilterState;
pub use format::{Rendered, SEPARATOR_LINE};
pub use kind::LogKind;
pub use lifecycle::AppEvent;
pub use printer::Printer;
pub use record::{LogRecord, RecordStore};
pub use sink::{LogSink, MemorySink, StdoutSink};
pub use style::LogStyle;
pub use trace::{CallSite, TraceInfo};
pub use writer::LogFileWriter;
