//! Error types for delimiter detection, header checks and conversion.
//!
//! Every failure the crate can report is a variant of [`SniffError`]. The
//! coarse [`ErrorKind`] lets callers tell a bad input ("this file has no
//! recognisable delimiter") apart from an I/O problem ("this file could not
//! be opened") without matching on every variant.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`SniffError`].
///
/// # Example
///
/// ```rust
/// use edgelist_sniff::ErrorKind;
///
/// assert_eq!(ErrorKind::InvalidArgument.description(), "Invalid argument");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input was readable but not acceptable (no delimiter, bad header).
    InvalidArgument,

    /// The file system refused an open, read or write.
    Io,

    /// A delimited record could not be parsed or written.
    Malformed,
}

impl ErrorKind {
    /// Human-readable description of the kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "Invalid argument",
            Self::Io => "I/O error",
            Self::Malformed => "Malformed record",
        }
    }
}

/// Errors returned by this crate.
///
/// # Example
///
/// ```rust
/// use edgelist_sniff::{ErrorKind, SniffError};
///
/// let error = SniffError::DelimiterNotDetected {
///     path: "edges.txt".into(),
/// };
/// assert_eq!(error.to_string(), "Could not detect filetype for edges.txt");
/// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SniffError {
    /// The whole file was scanned without a line revealing a delimiter.
    #[error("Could not detect filetype for {}", .path.display())]
    DelimiterNotDetected {
        /// The file that was scanned.
        path: PathBuf,
    },

    /// The file could not be opened (missing, permission denied, ...).
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        /// The file that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part way through the file, including invalid UTF-8.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the converted output failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// The output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A delimited record could not be parsed or serialized.
    #[error("Malformed record in {}: {source}", .path.display())]
    Csv {
        /// The file being processed.
        path: PathBuf,
        /// Underlying csv error.
        #[source]
        source: csv::Error,
    },

    /// A delimiter name was not one of the supported spellings.
    #[error("Unsupported delimiter '{0}': delimiter must be either comma, tab, or whitespace")]
    UnknownDelimiter(String),

    /// A replacement header repeats a column name.
    #[error("Headers must be unique, '{0}' appears more than once")]
    DuplicateHeader(String),

    /// A replacement header does not match the file's column count.
    #[error("Number of headers must match number of columns in the input file (expected {expected}, got {found})")]
    HeaderMismatch {
        /// Columns in the input's first row.
        expected: usize,
        /// Names supplied by the caller.
        found: usize,
    },
}

impl SniffError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DelimiterNotDetected { .. }
            | Self::UnknownDelimiter(_)
            | Self::DuplicateHeader(_)
            | Self::HeaderMismatch { .. } => ErrorKind::InvalidArgument,
            Self::Open { .. } | Self::Read { .. } | Self::Write { .. } => ErrorKind::Io,
            Self::Csv { .. } => ErrorKind::Malformed,
        }
    }

    /// Path of the file involved, when the error concerns one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::DelimiterNotDetected { path }
            | Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Csv { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SniffError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_not_detected_message() {
        let error = SniffError::DelimiterNotDetected {
            path: PathBuf::from("/data/graph.tsv"),
        };
        assert_eq!(
            error.to_string(),
            "Could not detect filetype for /data/graph.tsv"
        );
        assert_eq!(error.path(), Some(Path::new("/data/graph.tsv")));
    }

    #[test]
    fn test_open_error_is_io() {
        let error = SniffError::Open {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.to_string().contains("missing.csv"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_argument_kinds() {
        let errors = vec![
            SniffError::DelimiterNotDetected {
                path: PathBuf::from("a"),
            },
            SniffError::UnknownDelimiter(";".to_string()),
            SniffError::DuplicateHeader("source".to_string()),
            SniffError::HeaderMismatch {
                expected: 2,
                found: 3,
            },
        ];

        for error in errors {
            assert_eq!(
                error.kind(),
                ErrorKind::InvalidArgument,
                "unexpected kind for {:?}",
                error
            );
        }
    }

    #[test]
    fn test_header_mismatch_display() {
        let error = SniffError::HeaderMismatch {
            expected: 2,
            found: 3,
        };
        assert!(error.to_string().contains("expected 2, got 3"));
        assert!(error.path().is_none());
    }

    #[test]
    fn test_kind_descriptions() {
        assert_eq!(ErrorKind::Io.description(), "I/O error");
        assert_eq!(ErrorKind::Malformed.description(), "Malformed record");
        assert_ne!(ErrorKind::Io, ErrorKind::InvalidArgument);
    }
}
