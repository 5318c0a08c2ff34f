//! Conversion options configuration.
//!
//! This module provides the [`ConvertOptions`] struct for configuring how
//! [`convert`](crate::convert) rewrites a delimited file.

use crate::{Delimiter, Result, SniffError};
use std::collections::HashSet;

/// What to do with the header row when converting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Write every row unchanged.
    #[default]
    Keep,

    /// Drop the first row if it looks like a header. A file without a
    /// header is written unchanged.
    Remove,

    /// Replace the header with these names, or prepend them when the file
    /// has no header. Names must be unique and match the column count.
    Replace(Vec<String>),
}

impl HeaderMode {
    /// Check a replacement header against a file whose first row has
    /// `first_row_width` columns (`None` for an empty file).
    ///
    /// Names must be unique and, when the file has rows, match its width.
    /// `Keep` and `Remove` always pass.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgelist_sniff::{HeaderMode, SniffError};
    ///
    /// let mode = HeaderMode::Replace(vec!["a".to_string(), "a".to_string()]);
    /// assert!(matches!(mode.validate(Some(2)), Err(SniffError::DuplicateHeader(_))));
    /// ```
    pub fn validate(&self, first_row_width: Option<usize>) -> Result<()> {
        let Self::Replace(names) = self else {
            return Ok(());
        };

        let mut seen = HashSet::new();
        if let Some(duplicate) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(SniffError::DuplicateHeader(duplicate.clone()));
        }

        match first_row_width {
            Some(expected) if expected != names.len() => Err(SniffError::HeaderMismatch {
                expected,
                found: names.len(),
            }),
            _ => Ok(()),
        }
    }
}

/// Configuration options for delimiter conversion.
///
/// # Default Behavior
///
/// By default the source delimiter is kept and the header is written
/// unchanged, which makes conversion a plain normalising copy (comments
/// and blank lines are dropped).
///
/// # Example
///
/// ```rust
/// use edgelist_sniff::{ConvertOptions, Delimiter, HeaderMode};
///
/// // Rewrite as tab separated
/// let opts = ConvertOptions {
///     delimiter: Some(Delimiter::Tab),
///     ..Default::default()
/// };
///
/// // Keep the delimiter, strip the header
/// let opts = ConvertOptions {
///     header: HeaderMode::Remove,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Delimiter for the output. `None` keeps the detected source delimiter.
    pub delimiter: Option<Delimiter>,

    /// Header handling.
    pub header: HeaderMode,
}

impl ConvertOptions {
    /// Validate the options against the input's first row width before any
    /// conversion work is done. See [`HeaderMode::validate`].
    pub fn validate(&self, first_row_width: Option<usize>) -> Result<()> {
        self.header.validate(first_row_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_everything() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.delimiter, None);
        assert_eq!(opts.header, HeaderMode::Keep);
    }

    #[test]
    fn test_custom_delimiter() {
        let opts = ConvertOptions {
            delimiter: Some(Delimiter::Space),
            ..Default::default()
        };
        assert_eq!(opts.delimiter, Some(Delimiter::Space));
        assert_eq!(opts.header, HeaderMode::Keep);
    }

    #[test]
    fn test_clone() {
        let opts = ConvertOptions {
            delimiter: Some(Delimiter::Comma),
            header: HeaderMode::Replace(vec!["source".to_string(), "target".to_string()]),
        };
        let cloned = opts.clone();
        assert_eq!(opts.delimiter, cloned.delimiter);
        assert_eq!(opts.header, cloned.header);
    }

    fn names(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replace_rejects_duplicates() {
        let mode = HeaderMode::Replace(names(&["node_id", "node_id"]));
        let result = mode.validate(Some(2));
        assert!(matches!(result, Err(SniffError::DuplicateHeader(ref n)) if n == "node_id"));
    }

    #[test]
    fn test_replace_rejects_wrong_width() {
        let mode = HeaderMode::Replace(names(&["source", "target", "weight"]));
        assert!(matches!(
            mode.validate(Some(2)),
            Err(SniffError::HeaderMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_replace_on_empty_input() {
        let mode = HeaderMode::Replace(names(&["a", "b", "c"]));
        assert!(mode.validate(None).is_ok());
    }

    #[test]
    fn test_keep_and_remove_always_valid() {
        assert!(HeaderMode::Keep.validate(Some(3)).is_ok());
        assert!(HeaderMode::Remove.validate(None).is_ok());
    }

    #[test]
    fn test_convert_options_validate_delegates() {
        let opts = ConvertOptions {
            header: HeaderMode::Replace(names(&["a", "b"])),
            ..Default::default()
        };
        assert!(opts.validate(Some(2)).is_ok());
        assert!(opts.validate(Some(3)).is_err());
    }
}
