//! Rendering of log lines.
//!
//! Fancy layout (every segment is optional and collapses to nothing):
//!
//! ```text
//! [✅ Success] [⌚04-26-2017 16:39:39] [🆔 001] ➞ ✹✹This is a Success message.✹✹
//! ```
//!
//! Plain layout:
//!
//! ```text
//! [04-26-2017 16:39:39] ID ➞ 001 Details ➞ This is a Success message.
//! ```

use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::kind::LogKind;
use crate::record::LogRecord;
use crate::style::{LogStyle, DEFAULT_DATE_FORMAT};
use crate::trace::CallSite;

/// Rule printed after each log when separator lines are on, and around the
/// footer of saved log files.
pub const SEPARATOR_LINE: &str =
    "________________________________________________________________________________________";

/// Output of the formatter for one log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The exact line that gets printed
    pub text: String,
    /// The timestamp embedded in `text`; empty when timestamps are hidden
    pub timestamp: String,
}

/// Format `now` with the style's pattern, or `""` when timestamps are hidden.
pub fn timestamp(style: &LogStyle, now: DateTime<Local>) -> String {
    if style.hide_timestamp() {
        return String::new();
    }
    format_instant(style.date_format(), now)
}

/// Format `now` with `pattern`, falling back to the default pattern.
pub fn format_instant(pattern: &str, now: DateTime<Local>) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_DATE_FORMAT));
    }
    out
}

/// Render a log at `now`, choosing the layout from `kind`.
pub fn render_at(
    id: &str,
    details: &str,
    kind: LogKind,
    style: &LogStyle,
    now: DateTime<Local>,
) -> Rendered {
    if kind.is_plain() {
        render_plain(id, details, style, now)
    } else {
        render_fancy(id, details, kind, style, now)
    }
}

/// Decorated layout: title, timestamp, id and starred details.
pub fn render_fancy(
    id: &str,
    details: &str,
    kind: LogKind,
    style: &LogStyle,
    now: DateTime<Local>,
) -> Rendered {
    let time = timestamp(style, now);
    let mut segments: Vec<String> = Vec::with_capacity(4);

    let title = if style.capitalize_titles() {
        style.visible_title(kind).to_uppercase()
    } else {
        style.visible_title(kind).to_string()
    };
    let title_part = format!("{} {}", style.visible_emoji(kind), title);
    let title_part = title_part.trim();
    if !title_part.is_empty() {
        segments.push(format!("[{title_part}]"));
    }

    if !style.hide_timestamp() {
        segments.push(format!("[{}{}]", style.visible_timestamp_emoji(), time));
    }

    if !id.is_empty() {
        let id_part = format!("{} {}", style.visible_id_emoji(), id);
        segments.push(format!("[{}]", id_part.trim()));
    }

    if !details.is_empty() {
        let details = capitalized_details(details, style);
        let stars = style.star().repeat(2);
        segments.push(format!("{} {stars}{details}{stars}", style.arrow()));
    }

    Rendered {
        text: segments.join(" "),
        timestamp: time,
    }
}

/// Reduced layout with no emoji and no title.
pub fn render_plain(id: &str, details: &str, style: &LogStyle, now: DateTime<Local>) -> Rendered {
    let time = timestamp(style, now);
    let arrow = style.arrow();
    let mut segments: Vec<String> = Vec::with_capacity(3);

    if !style.hide_timestamp() {
        segments.push(format!("[{time}]"));
    }
    if !id.is_empty() {
        segments.push(format!("ID {arrow} {id}"));
    }
    if !details.is_empty() {
        segments.push(format!(
            "Details {arrow} {}",
            capitalized_details(details, style)
        ));
    }

    Rendered {
        text: segments.join(" "),
        timestamp: time,
    }
}

fn capitalized_details(details: &str, style: &LogStyle) -> String {
    if style.capitalize_details() {
        details.to_uppercase()
    } else {
        details.to_string()
    }
}

/// Line printed by a manual trace: `[Trace] ➞ [<time>] main.rs ➞ run #42`.
pub fn render_manual_trace(site: &CallSite, style: &LogStyle, now: DateTime<Local>) -> String {
    let arrow = style.arrow();
    let time = if style.hide_timestamp() {
        String::new()
    } else {
        format!("[{}] ", timestamp(style, now))
    };
    format!(
        "[Trace] {arrow} {time}{} {arrow} {} #{}",
        site.file_name(),
        site.operation,
        site.line
    )
}

/// One-line summary of a tracked record, used when dumping the history.
///
/// `[All Logs] [Success] [04-26-2017 16:39:39] Id:001 Details:Done`
pub fn render_summary(prefix: &str, record: &LogRecord, style: &LogStyle) -> String {
    if record.kind.is_plain() {
        format!(
            "[{prefix}] [{}] Id:{} Details:{}",
            record.timestamp, record.id, record.details
        )
    } else {
        format!(
            "[{prefix}] [{}] [{}] Id:{} Details:{}",
            style.visible_title(record.kind),
            record.timestamp,
            record.id,
            record.details
        )
    }
}
