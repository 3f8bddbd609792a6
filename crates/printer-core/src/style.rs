//! Style configuration: titles, emojis, symbols and the timestamp pattern.
//!
//! Every string field rejects empty assignments. Setting a title to `""`
//! keeps the previous title, so a stray assignment can never produce a log
//! line with dangling brackets. To blank the decorations on purpose use
//! [`LogStyle::hide_emojis`] and [`LogStyle::hide_titles`].

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::kind::LogKind;

/// Default timestamp pattern (`04-26-2017 16:39:39`).
pub const DEFAULT_DATE_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

/// One label per decorated kind. [`LogKind::Plain`] has no slot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct KindLabels {
    success: String,
    error: String,
    warning: String,
    information: String,
    alert: String,
}

impl KindLabels {
    fn get(&self, kind: LogKind) -> &str {
        match kind {
            LogKind::Success => &self.success,
            LogKind::Error => &self.error,
            LogKind::Warning => &self.warning,
            LogKind::Information => &self.information,
            LogKind::Alert => &self.alert,
            LogKind::Plain => "",
        }
    }

    fn get_mut(&mut self, kind: LogKind) -> Option<&mut String> {
        match kind {
            LogKind::Success => Some(&mut self.success),
            LogKind::Error => Some(&mut self.error),
            LogKind::Warning => Some(&mut self.warning),
            LogKind::Information => Some(&mut self.information),
            LogKind::Alert => Some(&mut self.alert),
            LogKind::Plain => None,
        }
    }
}

/// Replace `slot` with `value` unless `value` is empty.
fn assign_non_empty(slot: &mut String, value: impl Into<String>) {
    let value = value.into();
    if !value.is_empty() {
        *slot = value;
    }
}

/// Whether `pattern` is a usable strftime pattern.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Process-wide look of every printed log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StyleFile", into = "StyleFile")]
pub struct LogStyle {
    titles: KindLabels,
    emojis: KindLabels,
    timestamp_emoji: String,
    id_emoji: String,
    arrow: String,
    star: String,
    date_format: String,
    capitalize_titles: bool,
    capitalize_details: bool,
    hide_timestamp: bool,
    emojis_hidden: bool,
    titles_hidden: bool,
}

impl Default for LogStyle {
    fn default() -> Self {
        Self {
            titles: KindLabels {
                success: "Success".into(),
                error: "Error".into(),
                warning: "Warning".into(),
                information: "Information".into(),
                alert: "Alert".into(),
            },
            emojis: KindLabels {
                success: "✅".into(),
                error: "❌".into(),
                warning: "🚧".into(),
                information: "📣".into(),
                alert: "🚨".into(),
            },
            timestamp_emoji: "⌚".into(),
            id_emoji: "🆔".into(),
            arrow: "➞".into(),
            star: "✹".into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
            capitalize_titles: false,
            capitalize_details: false,
            hide_timestamp: false,
            emojis_hidden: false,
            titles_hidden: false,
        }
    }
}

impl LogStyle {
    // ═══════════════════════════════════════════════════════════════════════
    // Titles and emojis
    // ═══════════════════════════════════════════════════════════════════════

    /// The configured title for `kind`; always empty for `Plain`.
    pub fn title(&self, kind: LogKind) -> &str {
        self.titles.get(kind)
    }

    /// Ignored when `title` is empty or `kind` is `Plain`.
    pub fn set_title(&mut self, kind: LogKind, title: impl Into<String>) {
        if let Some(slot) = self.titles.get_mut(kind) {
            assign_non_empty(slot, title);
        }
    }

    /// The configured emoji for `kind`; always empty for `Plain`.
    pub fn emoji(&self, kind: LogKind) -> &str {
        self.emojis.get(kind)
    }

    /// Ignored when `emoji` is empty or `kind` is `Plain`.
    pub fn set_emoji(&mut self, kind: LogKind, emoji: impl Into<String>) {
        if let Some(slot) = self.emojis.get_mut(kind) {
            assign_non_empty(slot, emoji);
        }
    }

    pub fn timestamp_emoji(&self) -> &str {
        &self.timestamp_emoji
    }

    pub fn set_timestamp_emoji(&mut self, emoji: impl Into<String>) {
        assign_non_empty(&mut self.timestamp_emoji, emoji);
    }

    pub fn id_emoji(&self) -> &str {
        &self.id_emoji
    }

    pub fn set_id_emoji(&mut self, emoji: impl Into<String>) {
        assign_non_empty(&mut self.id_emoji, emoji);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Symbols and timestamp
    // ═══════════════════════════════════════════════════════════════════════

    /// Separator between segments, `➞` by default.
    pub fn arrow(&self) -> &str {
        &self.arrow
    }

    pub fn set_arrow(&mut self, arrow: impl Into<String>) {
        assign_non_empty(&mut self.arrow, arrow);
    }

    /// Doubled on each side of the details, `✹` by default.
    pub fn star(&self) -> &str {
        &self.star
    }

    pub fn set_star(&mut self, star: impl Into<String>) {
        assign_non_empty(&mut self.star, star);
    }

    /// strftime pattern used for every timestamp.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Empty or unparseable patterns are ignored.
    pub fn set_date_format(&mut self, pattern: impl Into<String>) {
        let pattern = pattern.into();
        if is_valid_date_format(&pattern) {
            self.date_format = pattern;
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Toggles
    // ═══════════════════════════════════════════════════════════════════════

    pub fn capitalize_titles(&self) -> bool {
        self.capitalize_titles
    }

    pub fn set_capitalize_titles(&mut self, on: bool) {
        self.capitalize_titles = on;
    }

    pub fn capitalize_details(&self) -> bool {
        self.capitalize_details
    }

    pub fn set_capitalize_details(&mut self, on: bool) {
        self.capitalize_details = on;
    }

    pub fn hide_timestamp(&self) -> bool {
        self.hide_timestamp
    }

    pub fn set_hide_timestamp(&mut self, on: bool) {
        self.hide_timestamp = on;
    }

    /// Print logs without any emoji. The configured emojis are kept.
    pub fn hide_emojis(&mut self) {
        self.emojis_hidden = true;
    }

    pub fn show_emojis(&mut self) {
        self.emojis_hidden = false;
    }

    pub fn emojis_hidden(&self) -> bool {
        self.emojis_hidden
    }

    /// Print logs without any title. The configured titles are kept.
    pub fn hide_titles(&mut self) {
        self.titles_hidden = true;
    }

    pub fn show_titles(&mut self) {
        self.titles_hidden = false;
    }

    pub fn titles_hidden(&self) -> bool {
        self.titles_hidden
    }

    // Render-time views, honoring the hide switches.

    pub(crate) fn visible_title(&self, kind: LogKind) -> &str {
        if self.titles_hidden {
            ""
        } else {
            self.title(kind)
        }
    }

    pub(crate) fn visible_emoji(&self, kind: LogKind) -> &str {
        if self.emojis_hidden {
            ""
        } else {
            self.emoji(kind)
        }
    }

    pub(crate) fn visible_timestamp_emoji(&self) -> &str {
        if self.emojis_hidden {
            ""
        } else {
            &self.timestamp_emoji
        }
    }

    pub(crate) fn visible_id_emoji(&self) -> &str {
        if self.emojis_hidden {
            ""
        } else {
            &self.id_emoji
        }
    }
}

/// On-disk shape of [`LogStyle`]. Missing or empty strings fall back to the
/// defaults because they are applied through the validated setters.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StyleFile {
    success_title: String,
    error_title: String,
    warning_title: String,
    information_title: String,
    alert_title: String,
    success_emoji: String,
    error_emoji: String,
    warning_emoji: String,
    information_emoji: String,
    alert_emoji: String,
    timestamp_emoji: String,
    id_emoji: String,
    arrow: String,
    star: String,
    date_format: String,
    capitalize_titles: bool,
    capitalize_details: bool,
    hide_timestamp: bool,
    hide_emojis: bool,
    hide_titles: bool,
}

impl From<StyleFile> for LogStyle {
    fn from(file: StyleFile) -> Self {
        let mut style = LogStyle::default();
        style.set_title(LogKind::Success, file.success_title);
        style.set_title(LogKind::Error, file.error_title);
        style.set_title(LogKind::Warning, file.warning_title);
        style.set_title(LogKind::Information, file.information_title);
        style.set_title(LogKind::Alert, file.alert_title);
        style.set_emoji(LogKind::Success, file.success_emoji);
        style.set_emoji(LogKind::Error, file.error_emoji);
        style.set_emoji(LogKind::Warning, file.warning_emoji);
        style.set_emoji(LogKind::Information, file.information_emoji);
        style.set_emoji(LogKind::Alert, file.alert_emoji);
        style.set_timestamp_emoji(file.timestamp_emoji);
        style.set_id_emoji(file.id_emoji);
        style.set_arrow(file.arrow);
        style.set_star(file.star);
        style.set_date_format(file.date_format);
        style.capitalize_titles = file.capitalize_titles;
        style.capitalize_details = file.capitalize_details;
        style.hide_timestamp = file.hide_timestamp;
        style.emojis_hidden = file.hide_emojis;
        style.titles_hidden = file.hide_titles;
        style
    }
}

impl From<LogStyle> for StyleFile {
    fn from(style: LogStyle) -> Self {
        Self {
            success_title: style.titles.success,
            error_title: style.titles.error,
            warning_title: style.titles.warning,
            information_title: style.titles.information,
            alert_title: style.titles.alert,
            success_emoji: style.emojis.success,
            error_emoji: style.emojis.error,
            warning_emoji: style.emojis.warning,
            information_emoji: style.emojis.information,
            alert_emoji: style.emojis.alert,
            timestamp_emoji: style.timestamp_emoji,
            id_emoji: style.id_emoji,
            arrow: style.arrow,
            star: style.star,
            date_format: style.date_format,
            capitalize_titles: style.capitalize_titles,
            capitalize_details: style.capitalize_details,
            hide_timestamp: style.hide_timestamp,
            hide_emojis: style.emojis_hidden,
            hide_titles: style.titles_hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = LogStyle::default();
        assert_eq!(style.title(LogKind::Success), "Success");
        assert_eq!(style.emoji(LogKind::Alert), "🚨");
        assert_eq!(style.timestamp_emoji(), "⌚");
        assert_eq!(style.id_emoji(), "🆔");
        assert_eq!(style.arrow(), "➞");
        assert_eq!(style.star(), "✹");
        assert_eq!(style.date_format(), DEFAULT_DATE_FORMAT);
        assert!(!style.capitalize_titles());
        assert!(!style.hide_timestamp());
    }

    #[test]
    fn test_empty_assignments_are_ignored() {
        let mut style = LogStyle::default();
        style.set_title(LogKind::Error, "Oops");
        style.set_title(LogKind::Error, "");
        style.set_emoji(LogKind::Warning, "");
        style.set_arrow("");
        style.set_star("");
        style.set_timestamp_emoji("");
        style.set_id_emoji("");
        style.set_date_format("");

        assert_eq!(style.title(LogKind::Error), "Oops");
        assert_eq!(style.emoji(LogKind::Warning), "🚧");
        assert_eq!(style.arrow(), "➞");
        assert_eq!(style.star(), "✹");
        assert_eq!(style.timestamp_emoji(), "⌚");
        assert_eq!(style.id_emoji(), "🆔");
        assert_eq!(style.date_format(), DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_plain_has_no_labels() {
        let mut style = LogStyle::default();
        style.set_title(LogKind::Plain, "Plain");
        style.set_emoji(LogKind::Plain, "📝");
        assert_eq!(style.title(LogKind::Plain), "");
        assert_eq!(style.emoji(LogKind::Plain), "");
    }

    #[test]
    fn test_invalid_date_format_is_ignored() {
        let mut style = LogStyle::default();
        style.set_date_format("%Y-%m-%d");
        style.set_date_format("%Q bogus");
        assert_eq!(style.date_format(), "%Y-%m-%d");
    }

    #[test]
    fn test_hide_emojis_keeps_values() {
        let mut style = LogStyle::default();
        style.hide_emojis();
        assert_eq!(style.visible_emoji(LogKind::Success), "");
        assert_eq!(style.visible_id_emoji(), "");
        assert_eq!(style.emoji(LogKind::Success), "✅");

        style.show_emojis();
        assert_eq!(style.visible_emoji(LogKind::Success), "✅");
    }

    #[test]
    fn test_deserialize_empty_strings_keep_defaults() {
        let style: LogStyle =
            serde_json::from_str(r#"{"success_title": "", "error_title": "Failure", "star": ""}"#)
                .unwrap();
        assert_eq!(style.title(LogKind::Success), "Success");
        assert_eq!(style.title(LogKind::Error), "Failure");
        assert_eq!(style.star(), "✹");
    }

    #[test]
    fn test_serialize_then_load_preserves_style() {
        let mut style = LogStyle::default();
        style.set_title(LogKind::Alert, "Heads up");
        style.set_capitalize_details(true);
        style.hide_titles();

        let json = serde_json::to_string(&style).unwrap();
        let loaded: LogStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, style);
    }
}
