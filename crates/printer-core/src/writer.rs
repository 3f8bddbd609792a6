//! Plain-text log file writer.
//!
//! Every save produces a new file with a random name inside one dedicated
//! directory, so deleting that directory removes everything Printer wrote:
//!
//! ```text
//! ~/Documents/Printer/
//! ├── 4fT9aQ0zLm.txt
//! └── Xy81bVv2Kq.txt
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rand::distr::Alphanumeric;
use rand::Rng;
use tracing::debug;

use crate::error::{PrinterError, PrinterResult};
use crate::format::SEPARATOR_LINE;
use crate::record::LogRecord;

/// Name of the dedicated directory.
pub const LOG_DIR_NAME: &str = "Printer";

/// Length of the random part of each file name.
pub const FILE_NAME_LEN: usize = 10;

/// Attribution line in the footer of every saved file.
pub const ATTRIBUTION: &str = "This log file was generated by Printer";

/// `<documents>/Printer`, or `<data>/Printer` when there is no documents
/// directory.
pub fn default_log_dir() -> PrinterResult<PathBuf> {
    dirs::document_dir()
        .or_else(dirs::data_dir)
        .map(|base| base.join(LOG_DIR_NAME))
        .ok_or(PrinterError::NoStorageLocation)
}

/// Random alphanumeric file name with a `.txt` extension.
pub fn random_file_name() -> String {
    let stem: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(FILE_NAME_LEN)
        .map(char::from)
        .collect();
    format!("{stem}.txt")
}

/// Build the contents of a log file.
///
/// One line per record, followed by its trace line when `include_trace` is
/// set and the record has one, then the footer.
pub fn render_file(records: &[LogRecord], include_trace: bool, generated_at: &str) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.rendered);
        out.push('\n');
        if include_trace {
            if let Some(trace) = &record.rendered_trace {
                out.push_str(trace);
                out.push('\n');
            }
        }
    }
    out.push_str(SEPARATOR_LINE);
    out.push('\n');
    out.push_str(ATTRIBUTION);
    out.push('\n');
    out.push_str("Time:");
    out.push_str(generated_at);
    out.push('\n');
    out.push_str(SEPARATOR_LINE);
    out.push('\n');
    out
}

/// Writes log files into one directory.
#[derive(Debug, Clone)]
pub struct LogFileWriter {
    dir: PathBuf,
}

impl LogFileWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writer for [`default_log_dir`].
    pub fn in_default_dir() -> PrinterResult<Self> {
        Ok(Self::new(default_log_dir()?))
    }

    /// Path of the dedicated directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory if it doesn't exist.
    pub fn ensure_dir(&self) -> PrinterResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| PrinterError::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }

    /// Write `records` to a new file and return its path.
    pub fn save(
        &self,
        records: &[LogRecord],
        include_trace: bool,
        generated_at: &str,
    ) -> PrinterResult<PathBuf> {
        self.ensure_dir()?;

        let path = self.dir.join(random_file_name());
        let contents = render_file(records, include_trace, generated_at);

        fs::write(&path, contents.as_bytes()).map_err(|source| PrinterError::WriteFile {
            path: path.clone(),
            source,
        })?;

        debug!(
            path = %path.display(),
            records = records.len(),
            bytes = contents.len(),
            "Log file saved"
        );
        Ok(path)
    }

    /// Remove the directory and everything in it.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn delete_all(&self) -> PrinterResult<bool> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => {
                debug!(dir = %self.dir.display(), "Log directory removed");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(PrinterError::RemoveDir {
                path: self.dir.clone(),
                source,
            }),
        }
    }

    /// Every saved `.txt` file, sorted by name.
    pub fn list_files(&self) -> PrinterResult<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e == "txt").unwrap_or(false) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::LogKind;
    use tempfile::TempDir;

    fn record(id: &str, trace: Option<&str>) -> LogRecord {
        LogRecord {
            id: id.to_string(),
            details: "details".to_string(),
            kind: LogKind::Success,
            timestamp: String::new(),
            trace: None,
            rendered: format!("[✅ Success] [🆔 {id}] ➞ ✹✹details✹✹"),
            rendered_trace: trace.map(str::to_string),
        }
    }

    #[test]
    fn test_random_file_name() {
        let name = random_file_name();
        assert_eq!(name.len(), FILE_NAME_LEN + 4);
        assert!(name.ends_with(".txt"));
        assert!(name[..FILE_NAME_LEN].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(random_file_name(), random_file_name());
    }

    #[test]
    fn test_render_file_with_and_without_trace() {
        let records = [record("1", Some("[Trace] ➞ a.rs ➞ f #1")), record("2", None)];

        let with_trace = render_file(&records, true, "now");
        let lines: Vec<_> = with_trace.lines().collect();
        assert_eq!(lines[0], records[0].rendered);
        assert_eq!(lines[1], "[Trace] ➞ a.rs ➞ f #1");
        assert_eq!(lines[2], records[1].rendered);
        assert_eq!(lines[3], SEPARATOR_LINE);
        assert_eq!(lines[4], ATTRIBUTION);
        assert_eq!(lines[5], "Time:now");
        assert_eq!(lines[6], SEPARATOR_LINE);

        let without_trace = render_file(&records, false, "now");
        assert!(!without_trace.contains("[Trace]"));
        assert_eq!(without_trace.lines().count(), 6);
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let writer = LogFileWriter::new(temp.path().join(LOG_DIR_NAME));

        let path = writer.save(&[record("1", None)], false, "now").unwrap();

        assert!(writer.dir().exists());
        assert_eq!(path.parent().unwrap(), writer.dir());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[✅ Success] [🆔 1]"));
        assert_eq!(writer.list_files().unwrap(), vec![path]);
    }

    #[test]
    fn test_delete_all() {
        let temp = TempDir::new().unwrap();
        let writer = LogFileWriter::new(temp.path().join(LOG_DIR_NAME));

        assert!(!writer.delete_all().unwrap());

        writer.save(&[record("1", None)], false, "now").unwrap();
        writer.save(&[record("2", None)], false, "now").unwrap();
        assert_eq!(writer.list_files().unwrap().len(), 2);

        assert!(writer.delete_all().unwrap());
        assert!(!writer.dir().exists());
        assert!(writer.list_files().unwrap().is_empty());
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let writer = LogFileWriter::new(blocker.join(LOG_DIR_NAME));
        let err = writer.save(&[record("1", None)], false, "now").unwrap_err();
        assert!(matches!(err, PrinterError::CreateDir { .. }));
    }
}
