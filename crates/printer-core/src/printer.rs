//! The printer: one emission pipeline shared by every caller.
//!
//! ```text
//! show() ─► disabled? ─► release gate ─► observer ─► filters
//!                                                      │
//!            sink ◄─ notify ◄─ track ◄─ trace ◄─ render (plain | fancy)
//! ```
//!
//! Emissions made by the printer itself (empty-history notices, save
//! reports, lifecycle messages) are *internal*: they are printed, but never
//! tracked, traced, observed or broadcast.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use chrono::Local;
use parking_lot::{Mutex, RwLock};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::config::{self, BuildMode, PrinterConfig, ReleaseBehavior};
use crate::error::PrinterError;
use crate::events::{LogObserver, PrinterEvent, EVENT_CHANNEL_CAPACITY};
use crate::filter::FilterState;
use crate::format::{self, SEPARATOR_LINE};
use crate::kind::LogKind;
use crate::lifecycle::AppEvent;
use crate::record::{LogRecord, RecordStore};
use crate::sink::{LogSink, StdoutSink};
use crate::style::LogStyle;
use crate::trace::{CallSite, TraceInfo};
use crate::writer::LogFileWriter;

/// Printed when a debug-only printer blocks a log in a release build.
pub const RELEASE_NOTICE: &str =
    "Printer can't log as release mode is active and 'debug_only' is set to 'true'.";

/// Printed when a debug-only printer blocks a manual trace in a release build.
pub const RELEASE_TRACE_NOTICE: &str =
    "Printer can't trace as release mode is active and 'debug_only' is set to 'true'.";

/// Printed when the history is requested or saved while empty.
pub const NO_TRACKED_LOGS: &str = "No tracked logs. To track logs, set 'keep_tracking' to 'true' and make sure the printer is not disabled.";

static GLOBAL: OnceLock<Printer> = OnceLock::new();

/// Switches that can change at any time.
#[derive(Debug, Clone)]
struct Settings {
    plain_log: bool,
    add_line_after_each_print: bool,
    debug_only: bool,
    keep_tracking: bool,
    auto_tracing: bool,
    build_mode: BuildMode,
    release_behavior: ReleaseBehavior,
}

impl Settings {
    fn release_gated(&self) -> bool {
        config::release_gated(self.debug_only, self.build_mode)
    }
}

/// Who asked for an emission.
#[derive(Clone, Copy)]
enum Source<'a> {
    Caller(&'a CallSite),
    Internal,
}

/// Fancy, filterable, trackable log printer.
///
/// A `Printer` is `Send + Sync`; share it behind an `Arc` (or use
/// [`Printer::global`]) and call it from anywhere.
pub struct Printer {
    disabled: AtomicBool,
    settings: RwLock<Settings>,
    style: RwLock<LogStyle>,
    filter: RwLock<FilterState>,
    store: Mutex<RecordStore>,
    observer: RwLock<Option<LogObserver>>,
    writer: RwLock<Option<LogFileWriter>>,
    sink: Arc<dyn LogSink>,
    event_tx: broadcast::Sender<PrinterEvent>,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrinterConfig::default())
    }
}

impl std::fmt::Debug for Printer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Printer")
            .field("disabled", &self.is_disabled())
            .field("settings", &*self.settings.read())
            .field("tracked", &self.tracked_count())
            .finish_non_exhaustive()
    }
}

impl Printer {
    /// Create a printer that writes to stdout.
    pub fn new(config: PrinterConfig) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    /// Create a printer that writes to `sink`.
    pub fn with_sink(config: PrinterConfig, sink: Arc<dyn LogSink>) -> Self {
        let writer = match config.log_dir {
            Some(dir) => Some(LogFileWriter::new(dir)),
            None => LogFileWriter::in_default_dir().ok(),
        };
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            disabled: AtomicBool::new(config.disabled),
            settings: RwLock::new(Settings {
                plain_log: config.plain_log,
                add_line_after_each_print: config.add_line_after_each_print,
                debug_only: config.debug_only,
                keep_tracking: config.keep_tracking,
                auto_tracing: config.auto_tracing,
                build_mode: config.build_mode,
                release_behavior: config.release_behavior,
            }),
            style: RwLock::new(config.style),
            filter: RwLock::new(FilterState::new()),
            store: Mutex::new(RecordStore::new()),
            observer: RwLock::new(None),
            writer: RwLock::new(writer),
            sink,
            event_tx,
        }
    }

    /// Install `printer` as the process-wide instance.
    ///
    /// Fails, handing the printer back, if one is already installed.
    pub fn install_global(printer: Printer) -> Result<(), Printer> {
        GLOBAL.set(printer)
    }

    /// The process-wide instance, created with defaults on first use.
    pub fn global() -> &'static Printer {
        GLOBAL.get_or_init(Printer::default)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Emission
    // ═══════════════════════════════════════════════════════════════════════

    /// Print a log. An empty `id` prints no id segment.
    pub fn show(&self, id: &str, details: &str, kind: LogKind, site: CallSite) {
        self.emit(id, details, kind, Source::Caller(&site));
    }

    pub fn success(&self, id: &str, details: &str, site: CallSite) {
        self.show(id, details, LogKind::Success, site);
    }

    pub fn error(&self, id: &str, details: &str, site: CallSite) {
        self.show(id, details, LogKind::Error, site);
    }

    pub fn warning(&self, id: &str, details: &str, site: CallSite) {
        self.show(id, details, LogKind::Warning, site);
    }

    pub fn information(&self, id: &str, details: &str, site: CallSite) {
        self.show(id, details, LogKind::Information, site);
    }

    pub fn alert(&self, id: &str, details: &str, site: CallSite) {
        self.show(id, details, LogKind::Alert, site);
    }

    pub fn plain(&self, id: &str, details: &str, site: CallSite) {
        self.show(id, details, LogKind::Plain, site);
    }

    /// Print a log after `delay`.
    ///
    /// Runs on the current tokio runtime when there is one, on a detached
    /// thread otherwise. Once scheduled it cannot be cancelled.
    pub fn show_in_future(
        self: &Arc<Self>,
        id: impl Into<String>,
        details: impl Into<String>,
        kind: LogKind,
        delay: Duration,
        site: CallSite,
    ) {
        let printer = Arc::clone(self);
        let id = id.into();
        let details = details.into();
        debug!(?delay, %kind, "Scheduling deferred log");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    printer.show(&id, &details, kind, site);
                });
            }
            Err(_) => {
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    printer.show(&id, &details, kind, site);
                });
            }
        }
    }

    /// Print the call site: `[Trace] ➞ [<time>] main.rs ➞ run #42`.
    ///
    /// Filtered like a plain log from `site.file`. Never tracked.
    pub fn trace(&self, site: CallSite) {
        if self.is_disabled() {
            return;
        }
        let (gated, behavior, add_line) = {
            let settings = self.settings.read();
            (
                settings.release_gated(),
                settings.release_behavior,
                settings.add_line_after_each_print,
            )
        };
        if gated {
            if behavior == ReleaseBehavior::Notice {
                self.process("", RELEASE_TRACE_NOTICE, LogKind::Information, Source::Internal);
            }
            return;
        }
        if !self.filter.read().should_emit(LogKind::Plain, &site.file) {
            return;
        }

        let line = format::render_manual_trace(&site, &self.style.read(), Local::now());
        self.sink.write_line(&line);
        if add_line {
            self.sink.write_line(SEPARATOR_LINE);
        }
    }

    /// Print the fixed message for a lifecycle transition of the host.
    pub fn app_event(&self, event: AppEvent) {
        self.emit_internal(event.message(), LogKind::Information);
    }

    fn emit_internal(&self, details: &str, kind: LogKind) {
        self.emit("", details, kind, Source::Internal);
    }

    fn emit(&self, id: &str, details: &str, kind: LogKind, source: Source<'_>) {
        if self.is_disabled() {
            return;
        }

        let (gated, behavior) = {
            let settings = self.settings.read();
            (settings.release_gated(), settings.release_behavior)
        };
        if gated {
            // The notice goes straight to `process` so it is never gated itself.
            if behavior == ReleaseBehavior::Notice {
                self.process("", RELEASE_NOTICE, LogKind::Information, Source::Internal);
            }
            return;
        }

        self.process(id, details, kind, source);
    }

    fn process(&self, id: &str, details: &str, kind: LogKind, source: Source<'_>) {
        if let Source::Caller(site) = source {
            let observer = self.observer.read().clone();
            if let Some(observer) = observer {
                observer(details, site.file_name(), &site.operation, site.line);
            }
        }

        let passes = {
            let filter = self.filter.read();
            match source {
                Source::Caller(site) => filter.should_emit(kind, &site.file),
                Source::Internal => filter.allows_kind(kind),
            }
        };
        if !passes {
            return;
        }

        let settings = self.settings.read().clone();
        let kind = if settings.plain_log { LogKind::Plain } else { kind };
        let (rendered, arrow) = {
            let style = self.style.read();
            (
                format::render_at(id, details, kind, &style, Local::now()),
                style.arrow().to_string(),
            )
        };

        let trace = match source {
            Source::Caller(site) if settings.auto_tracing => Some(TraceInfo::capture(site)),
            _ => None,
        };
        let rendered_trace = trace.as_ref().map(|t| t.render(&arrow));

        if let Source::Caller(_) = source {
            if settings.keep_tracking {
                let record = LogRecord {
                    id: id.to_string(),
                    details: details.to_string(),
                    kind,
                    timestamp: rendered.timestamp.clone(),
                    trace,
                    rendered: rendered.text.clone(),
                    rendered_trace: rendered_trace.clone(),
                };
                self.store.lock().append(record);
                // No receivers is fine.
                let _ = self.event_tx.send(PrinterEvent::LogAdded);
            }
        }

        self.sink.write_line(&rendered.text);
        if let Some(line) = &rendered_trace {
            self.sink.write_line(line);
        }
        if settings.add_line_after_each_print {
            self.sink.write_line(SEPARATOR_LINE);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tracked history
    // ═══════════════════════════════════════════════════════════════════════

    /// Every tracked record in emission order.
    ///
    /// Prints a notice when there is nothing tracked.
    pub fn all_logs(&self) -> Vec<LogRecord> {
        let records = self.store.lock().all().to_vec();
        if records.is_empty() {
            self.emit_internal(NO_TRACKED_LOGS, LogKind::Information);
        }
        records
    }

    /// Tracked records whose kind is in `kinds`, in emission order.
    ///
    /// Prints a notice when nothing is tracked, or when nothing matches.
    pub fn filtered_logs(&self, kinds: &[LogKind]) -> Vec<LogRecord> {
        let (total, records) = {
            let store = self.store.lock();
            (store.len(), store.filtered(kinds))
        };
        if total == 0 {
            self.emit_internal(NO_TRACKED_LOGS, LogKind::Information);
        } else if records.is_empty() {
            self.emit_internal(
                &format!("No tracked logs for filter. Total tracked logs: #{total}"),
                LogKind::Information,
            );
        }
        records
    }

    /// Number of tracked records.
    pub fn tracked_count(&self) -> usize {
        self.store.lock().len()
    }

    /// Print a one-line summary of every tracked record.
    pub fn print_all(&self, show_trace: bool) {
        let records = self.all_logs();
        self.print_summaries("All Logs", &records, show_trace);
    }

    /// Print a one-line summary of every tracked record of the given kinds.
    pub fn print_filtered(&self, kinds: &[LogKind], show_trace: bool) {
        let records = self.filtered_logs(kinds);
        self.print_summaries("All Logs.filtered", &records, show_trace);
    }

    fn print_summaries(&self, prefix: &str, records: &[LogRecord], show_trace: bool) {
        if records.is_empty() || self.is_disabled() {
            return;
        }
        let lines: Vec<String> = {
            let style = self.style.read();
            records
                .iter()
                .flat_map(|record| {
                    let summary = format::render_summary(prefix, record, &style);
                    let trace = show_trace
                        .then(|| record.trace.as_ref().map(|t| t.render(style.arrow())))
                        .flatten();
                    std::iter::once(summary).chain(trace)
                })
                .collect()
        };
        for line in &lines {
            self.sink.write_line(line);
        }
        if self.settings.read().add_line_after_each_print {
            self.sink.write_line(SEPARATOR_LINE);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Log files
    // ═══════════════════════════════════════════════════════════════════════

    /// Save `records` to a new file in the log directory.
    ///
    /// Returns the file path. Every outcome is also reported as a log:
    /// a notice for an empty list, a success with the path, or an alert.
    pub fn save_logs(&self, records: &[LogRecord]) -> Option<PathBuf> {
        if records.is_empty() {
            self.emit_internal(NO_TRACKED_LOGS, LogKind::Information);
            return None;
        }

        let Some(writer) = self.writer.read().clone() else {
            self.report_failure(PrinterError::NoStorageLocation);
            return None;
        };
        let include_trace = self.settings.read().keep_tracking;
        let generated_at = format::format_instant(self.style.read().date_format(), Local::now());

        match writer.save(records, include_trace, &generated_at) {
            Ok(path) => {
                self.emit_internal(
                    &format!("Log file has been saved at: {}", path.display()),
                    LogKind::Success,
                );
                Some(path)
            }
            Err(e) => {
                self.report_failure(e);
                None
            }
        }
    }

    /// Remove the log directory and every file in it.
    pub fn delete_log_files(&self) {
        let Some(writer) = self.writer.read().clone() else {
            self.report_failure(PrinterError::NoStorageLocation);
            return;
        };
        if let Err(e) = writer.delete_all() {
            self.report_failure(e);
        }
    }

    /// Clear the tracked history and delete every saved log file.
    pub fn flush(&self) {
        self.store.lock().clear();
        debug!("Tracked logs flushed");
        self.delete_log_files();
    }

    /// Every file saved so far.
    pub fn log_files(&self) -> Vec<PathBuf> {
        let Some(writer) = self.writer.read().clone() else {
            return Vec::new();
        };
        match writer.list_files() {
            Ok(files) => files,
            Err(e) => {
                self.report_failure(e);
                Vec::new()
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.writer.read().as_ref().map(|w| w.dir().to_path_buf())
    }

    pub fn set_log_dir(&self, dir: impl Into<PathBuf>) {
        *self.writer.write() = Some(LogFileWriter::new(dir));
    }

    fn report_failure(&self, error: PrinterError) {
        warn!(error = %error, "Printer file operation failed");
        self.emit_internal(&error.to_string(), LogKind::Alert);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Observers and notifications
    // ═══════════════════════════════════════════════════════════════════════

    /// Call `observer` with `(details, file name, operation, line)` for every
    /// log, before any filter applies.
    pub fn set_observer<F>(&self, observer: F)
    where
        F: Fn(&str, &str, &str, u32) + Send + Sync + 'static,
    {
        *self.observer.write() = Some(Arc::new(observer));
    }

    pub fn clear_observer(&self) {
        *self.observer.write() = None;
    }

    /// Receive a [`PrinterEvent::LogAdded`] each time a record is tracked.
    pub fn subscribe(&self) -> broadcast::Receiver<PrinterEvent> {
        self.event_tx.subscribe()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Filters
    // ═══════════════════════════════════════════════════════════════════════

    /// Only print the given kinds. An empty list prints every kind.
    pub fn set_kind_filter(&self, kinds: impl IntoIterator<Item = LogKind>) {
        self.filter.write().set_kinds(kinds);
    }

    pub fn kind_filter(&self) -> Vec<LogKind> {
        self.filter.read().kinds().to_vec()
    }

    /// Stop printing logs made from `file` (compare with `file!()`).
    pub fn skip_origin(&self, file: impl Into<String>) {
        self.filter.write().skip_origin(file);
    }

    /// Print logs made from `file` again.
    pub fn allow_origin(&self, file: &str) {
        self.filter.write().allow_origin(file);
    }

    pub fn skipped_origins(&self) -> Vec<String> {
        self.filter.read().skipped_origins().to_vec()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Style
    // ═══════════════════════════════════════════════════════════════════════

    /// Snapshot of the current style.
    pub fn style(&self) -> LogStyle {
        self.style.read().clone()
    }

    /// Change the style.
    ///
    /// `f` runs on a copy with no lock held, so it may log through this
    /// printer. Concurrent updates are last-writer-wins.
    ///
    /// ```
    /// # use printer_core::{LogKind, Printer};
    /// let printer = Printer::default();
    /// printer.update_style(|style| style.set_title(LogKind::Success, "Done"));
    /// assert_eq!(printer.style().title(LogKind::Success), "Done");
    /// ```
    pub fn update_style<R>(&self, f: impl FnOnce(&mut LogStyle) -> R) -> R {
        let mut style = self.style();
        let result = f(&mut style);
        *self.style.write() = style;
        result
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Switches
    // ═══════════════════════════════════════════════════════════════════════

    /// Block every log from now on, without any side effect.
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    pub fn set_plain_log(&self, on: bool) {
        self.settings.write().plain_log = on;
    }

    pub fn plain_log(&self) -> bool {
        self.settings.read().plain_log
    }

    pub fn set_add_line_after_each_print(&self, on: bool) {
        self.settings.write().add_line_after_each_print = on;
    }

    pub fn add_line_after_each_print(&self) -> bool {
        self.settings.read().add_line_after_each_print
    }

    pub fn set_debug_only(&self, on: bool) {
        self.settings.write().debug_only = on;
    }

    pub fn debug_only(&self) -> bool {
        self.settings.read().debug_only
    }

    pub fn set_keep_tracking(&self, on: bool) {
        self.settings.write().keep_tracking = on;
    }

    pub fn keep_tracking(&self) -> bool {
        self.settings.read().keep_tracking
    }

    pub fn set_auto_tracing(&self, on: bool) {
        self.settings.write().auto_tracing = on;
    }

    pub fn auto_tracing(&self) -> bool {
        self.settings.read().auto_tracing
    }

    pub fn set_build_mode(&self, mode: BuildMode) {
        self.settings.write().build_mode = mode;
    }

    pub fn build_mode(&self) -> BuildMode {
        self.settings.read().build_mode
    }

    pub fn set_release_behavior(&self, behavior: ReleaseBehavior) {
        self.settings.write().release_behavior = behavior;
    }

    pub fn release_behavior(&self) -> ReleaseBehavior {
        self.settings.read().release_behavior
    }
}
