//! Error types for Printer

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Printer operations.
///
/// These never escape the [`Printer`](crate::Printer) facade for save,
/// delete or flush: the facade reports them as alert logs instead.
#[derive(Error, Debug)]
pub enum PrinterError {
    /// The dedicated log directory could not be created
    #[error("Unable to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file could not be written
    #[error("Error while saving log file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dedicated log directory could not be removed
    #[error("Unable to delete directory {path}: {source}")]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither a documents nor a data directory could be resolved
    #[error("No writable location available for log files")]
    NoStorageLocation,

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PrinterError
pub type PrinterResult<T> = Result<T, PrinterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrinterError::CreateDir {
            path: PathBuf::from("/tmp/Printer"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            format!("{}", err),
            "Unable to create directory /tmp/Printer: denied"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PrinterError = io_err.into();
        assert!(matches!(err, PrinterError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PrinterError = json_err.into();
        assert!(err.to_string().starts_with("Config error:"));
    }
}
